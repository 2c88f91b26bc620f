//! Project executor.

use crate::ast::Projection;
use quarry_core::{Result, Table};

/// Project executor - maps every record through a projection.
pub struct ProjectExecutor<'a> {
    projection: &'a Projection,
}

impl<'a> ProjectExecutor<'a> {
    /// Creates a new project executor.
    pub fn new(projection: &'a Projection) -> Self {
        Self { projection }
    }

    /// Executes the projection. Output has the input's length and order.
    pub fn execute(&self, input: &Table) -> Result<Table> {
        input.iter().map(|r| self.projection.apply(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use quarry_core::{Record, Value};

    #[test]
    fn test_project_executor() {
        let input = Table::from_rows(vec![
            vec![Value::Int64(1), Value::from("Alice"), Value::Int64(25)],
            vec![Value::Int64(2), Value::from("Bob"), Value::Int64(30)],
        ]);
        let projection = Projection::try_new(|r| Ok(Record::row(vec![r.at(0)?.clone(), r.at(2)?.clone()])));

        let result = ProjectExecutor::new(&projection).execute(&input).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(
            result.get(0),
            Some(&Record::row(vec![Value::Int64(1), Value::Int64(25)]))
        );
    }

    #[test]
    fn test_project_executor_shape_mismatch() {
        let input = Table::new(vec![Record::named([("id", 1i64)])]);
        let projection = Projection::try_new(|r| Ok(Record::row(vec![r.at(0)?.clone()])));
        assert!(ProjectExecutor::new(&projection).execute(&input).is_err());
    }
}
