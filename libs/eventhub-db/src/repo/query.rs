use sea_orm::{Condition, EntityTrait, Order, QueryFilter, QueryOrder, Select};

/// Single-field sort for list queries.
#[derive(Debug, Clone)]
pub struct Sort<C> {
    pub column: C,
    pub descending: bool,
}

impl<C> Sort<C> {
    #[must_use]
    pub fn asc(column: C) -> Self {
        Self {
            column,
            descending: false,
        }
    }

    #[must_use]
    pub fn desc(column: C) -> Self {
        Self {
            column,
            descending: true,
        }
    }

    fn order(&self) -> Order {
        if self.descending {
            Order::Desc
        } else {
            Order::Asc
        }
    }
}

/// Filter and sort applied by the list operations of [`super::BaseRepository`].
///
/// ```ignore
/// let query = ListQuery::<event::Entity>::new()
///     .filter(Condition::all().add(event::Column::CreatorId.eq("u1")))
///     .sort(Sort::desc(event::Column::EventDate));
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct ListQuery<E: EntityTrait> {
    filter: Option<Condition>,
    sort: Option<Sort<E::Column>>,
}

impl<E: EntityTrait> Default for ListQuery<E> {
    fn default() -> Self {
        Self {
            filter: None,
            sort: None,
        }
    }
}

impl<E: EntityTrait> ListQuery<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only rows matching `cond`. Calling it again narrows further (AND).
    pub fn filter(mut self, cond: Condition) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => Condition::all().add(existing).add(cond),
            None => cond,
        });
        self
    }

    /// Order by a single column. Replaces any previous sort.
    pub fn sort(mut self, sort: Sort<E::Column>) -> Self {
        self.sort = Some(sort);
        self
    }

    pub(crate) fn apply(self, mut select: Select<E>) -> Select<E> {
        if let Some(cond) = self.filter {
            select = select.filter(cond);
        }
        if let Some(sort) = self.sort {
            let order = sort.order();
            select = select.order_by(sort.column, order);
        }
        select
    }
}
