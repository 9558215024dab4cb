use jsonmap_core::schema::ConfigureField;
use jsonmap_sql::ParseExpression;

use std::sync::{Arc, PoisonError, RwLock};

/// Extension points of a [`Db`](crate::Db).
///
/// Handlers subscribe at any time. A model's columns are configured once, so
/// a `configure_field` handler added after a model was first used has no
/// effect on that model.
#[derive(Default)]
pub struct Aop {
    configure_field: RwLock<Vec<Arc<dyn ConfigureField>>>,
    parse_expression: RwLock<Vec<Arc<dyn ParseExpression>>>,
}

impl Aop {
    /// Subscribes to column configuration. Handlers run in subscription
    /// order.
    pub fn add_configure_field(&self, handler: Arc<dyn ConfigureField>) {
        self.configure_field
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handler);
    }

    /// Subscribes to predicate translation. The first hook to set a result
    /// for a node wins.
    pub fn add_parse_expression(&self, hook: Arc<dyn ParseExpression>) {
        self.parse_expression
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(hook);
    }

    pub fn configure_field_handlers(&self) -> Vec<Arc<dyn ConfigureField>> {
        self.configure_field
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn parse_expression_hooks(&self) -> Vec<Arc<dyn ParseExpression>> {
        self.parse_expression
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl std::fmt::Debug for Aop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aop")
            .field("configure_field", &self.configure_field_handlers().len())
            .field("parse_expression", &self.parse_expression_hooks().len())
            .finish()
    }
}
