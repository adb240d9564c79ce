/// Defines the [`Visitor`](crate::ast::visitor::Visitor) trait from a list of
/// `enter / leave : NodeType` hook pairs. Every hook defaults to continuing the
/// traversal, so visitors only override the nodes they care about.
macro_rules! define_visitor {
    (
        $(#[$meta:meta])*
        pub trait $trait_name:ident {
            $( $enter:ident / $leave:ident : $node:ty; )*
        }
    ) => {
        $(#[$meta])*
        pub trait $trait_name {
            /// Early-exit payload produced when traversal stops.
            type Break;

            $(
                fn $enter(&mut self, _node: &$node) -> VisitResult<Self::Break> {
                    ControlFlow::Continue(())
                }

                fn $leave(&mut self, _node: &$node) -> VisitResult<Self::Break> {
                    ControlFlow::Continue(())
                }
            )*
        }
    };
}

/// Propagates a `ControlFlow::Break` out of the enclosing function.
macro_rules! try_visit {
    ($expr:expr) => {
        match $expr {
            ControlFlow::Continue(()) => {}
            ControlFlow::Break(b) => return ControlFlow::Break(b),
        }
    };
}

pub(crate) use define_visitor;
pub(crate) use try_visit;
