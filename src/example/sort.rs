//! Sorting and paging of example queries.

use smol_str::SmolStr;

use super::predicate::root_node;
use super::schema::NodeDescription;
use crate::ast::{Expression, SortDirection, SortItem};
use crate::builder::{OngoingReadingAndReturn, id, to_lower};
use crate::error::UnsupportedExampleError;

/// One sort criterion, addressed by field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub property: SmolStr,
    pub direction: SortDirection,
    pub ignore_case: bool,
}

impl SortOrder {
    pub fn asc(property: impl Into<SmolStr>) -> Self {
        Self {
            property: property.into(),
            direction: SortDirection::Ascending,
            ignore_case: false,
        }
    }

    pub fn desc(property: impl Into<SmolStr>) -> Self {
        Self {
            direction: SortDirection::Descending,
            ..Self::asc(property)
        }
    }

    /// Compares lower-cased values.
    pub fn ignoring_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sort {
    orders: Vec<SortOrder>,
}

impl Sort {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by<I: IntoIterator<Item = SortOrder>>(orders: I) -> Self {
        Self {
            orders: orders.into_iter().collect(),
        }
    }

    pub fn and(mut self, order: SortOrder) -> Self {
        self.orders.push(order);
        self
    }

    pub fn is_sorted(&self) -> bool {
        !self.orders.is_empty()
    }

    pub fn orders(&self) -> &[SortOrder] {
        &self.orders
    }
}

/// A page request. Pages are zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pageable {
    page: u64,
    size: u64,
    sort: Sort,
    paged: bool,
}

impl Pageable {
    /// Page `page` with `size` rows per page. A zero size is raised to one.
    pub fn of(page: u64, size: u64) -> Self {
        Self {
            page,
            size: size.max(1),
            sort: Sort::unsorted(),
            paged: true,
        }
    }

    /// No paging; only the sort applies.
    pub fn unpaged() -> Self {
        Self {
            page: 0,
            size: 0,
            sort: Sort::unsorted(),
            paged: false,
        }
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    pub fn is_paged(&self) -> bool {
        self.paged
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Rows to skip: `page * size`, or `None` on overflow.
    pub fn offset(&self) -> Option<u64> {
        self.page.checked_mul(self.size)
    }

    pub fn sort(&self) -> &Sort {
        &self.sort
    }
}

/// Maps a [`Sort`] onto sort items over the root node.
pub fn to_sort_items(
    description: &NodeDescription,
    sort: &Sort,
) -> Result<Vec<SortItem>, UnsupportedExampleError> {
    let root = root_node(description);
    sort.orders()
        .iter()
        .map(|order| -> Result<SortItem, UnsupportedExampleError> {
            let property = description
                .property(&order.property)
                .filter(|property| !property.is_association())
                .ok_or_else(|| UnsupportedExampleError::UnknownSortProperty {
                    type_name: SmolStr::new(description.type_name()),
                    property: order.property.clone(),
                })?;
            let mut expression: Expression = if property.is_internal_id() {
                id(root.as_expression())
            } else {
                root.property(property.graph_property_name())
            };
            if order.ignore_case {
                expression = to_lower(expression);
            }
            Ok(SortItem::new(expression, Some(order.direction)))
        })
        .collect()
}

/// Applies the page's sort, then `SKIP page*size LIMIT size` when paged.
pub fn add_paging(
    description: &NodeDescription,
    pageable: &Pageable,
    returning: OngoingReadingAndReturn,
) -> Result<OngoingReadingAndReturn, UnsupportedExampleError> {
    let returning = returning.order_by(to_sort_items(description, pageable.sort())?);
    if !pageable.is_paged() {
        return Ok(returning);
    }
    let out_of_range = || UnsupportedExampleError::PageOutOfRange {
        page: pageable.page(),
        size: pageable.size(),
    };
    let offset = pageable
        .offset()
        .and_then(|offset| i64::try_from(offset).ok())
        .ok_or_else(out_of_range)?;
    let size = i64::try_from(pageable.size()).map_err(|_| out_of_range())?;
    Ok(returning.skip(offset).limit(size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::asterisk;
    use crate::example::{PropertyDescription, prepare_match_of};
    use crate::renderer::render;

    fn person() -> NodeDescription {
        NodeDescription::new("Person", "Person")
            .with_property(PropertyDescription::simple("id").internal_id())
            .with_property(PropertyDescription::new("name", "fullName"))
            .with_property(PropertyDescription::simple("friends").association())
    }

    #[test]
    fn sort_items_use_graph_names() {
        let sort = Sort::by([SortOrder::asc("name").ignoring_case()]).and(SortOrder::desc("id"));
        let statement = prepare_match_of(&person(), None)
            .returning([asterisk()])
            .order_by(to_sort_items(&person(), &sort).unwrap())
            .build();
        assert_eq!(
            render(&statement).unwrap(),
            "MATCH (n:Person) RETURN * ORDER BY toLower(n.fullName) ASC, id(n) DESC"
        );
    }

    #[test]
    fn unknown_and_association_sort_properties_fail() {
        for property in ["age", "friends"] {
            let err = to_sort_items(&person(), &Sort::by([SortOrder::asc(property)])).unwrap_err();
            assert_eq!(
                err,
                UnsupportedExampleError::UnknownSortProperty {
                    type_name: "Person".into(),
                    property: property.into(),
                }
            );
        }
    }

    #[test]
    fn paging_appends_skip_and_limit() {
        let pageable = Pageable::of(2, 25).with_sort(Sort::by([SortOrder::asc("name")]));
        let returning = prepare_match_of(&person(), None).returning([asterisk()]);
        let statement = add_paging(&person(), &pageable, returning).unwrap().build();
        assert_eq!(
            render(&statement).unwrap(),
            "MATCH (n:Person) RETURN * ORDER BY n.fullName ASC SKIP 50 LIMIT 25"
        );
    }

    #[test]
    fn pages_beyond_the_integer_range_are_rejected() {
        for pageable in [Pageable::of(u64::MAX, 2), Pageable::of(0, u64::MAX)] {
            let returning = prepare_match_of(&person(), None).returning([asterisk()]);
            let err = add_paging(&person(), &pageable, returning).unwrap_err();
            assert_eq!(
                err,
                UnsupportedExampleError::PageOutOfRange {
                    page: pageable.page(),
                    size: pageable.size(),
                }
            );
        }
    }

    #[test]
    fn unpaged_keeps_sort_only() {
        let returning = prepare_match_of(&person(), None).returning([asterisk()]);
        let statement = add_paging(&person(), &Pageable::unpaged(), returning)
            .unwrap()
            .build();
        assert_eq!(render(&statement).unwrap(), "MATCH (n:Person) RETURN *");
    }
}
