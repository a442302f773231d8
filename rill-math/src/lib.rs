//! Rill Math Library

pub mod functions;

use rill_plugin::FunctionRegistry;

/// Load the math functions into a registry
pub fn load_math_library(registry: FunctionRegistry) -> FunctionRegistry {
    registry.with_function(functions::Floor)
}

/// Create a registry with the math library loaded
pub fn math_registry() -> FunctionRegistry {
    load_math_library(FunctionRegistry::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_plugin::prelude::*;

    #[test]
    fn test_floor_is_registered() {
        let registry = math_registry();
        assert!(registry.get("math:floor").is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_bind_and_evaluate_through_registry() {
        let registry = math_registry();
        let ctx = AppContext::new("in-value-stream");
        let bound = registry
            .bind(
                "math:floor",
                &[ArgExpr::of(AttributeType::Double)],
                &ConfigReader::new(),
                &ctx,
            )
            .unwrap();

        assert_eq!(bound.return_type(), AttributeType::Double);
        assert_eq!(bound.evaluate(&Value::Double(10.23)), Ok(Value::Double(10.0)));
        assert_eq!(bound.evaluate(&Value::Int(10)), Ok(Value::Double(10.0)));
        assert_eq!(bound.evaluate(&Value::Long(-1)), Ok(Value::Double(-1.0)));
        assert!(bound.evaluate(&Value::Null).is_err());
    }

    #[test]
    fn test_bind_rejects_text_argument() {
        let registry = math_registry();
        let ctx = AppContext::new("in-value-stream");
        let err = registry
            .bind(
                "math:floor",
                &[ArgExpr::of(AttributeType::Text)],
                &ConfigReader::new(),
                &ctx,
            )
            .unwrap_err();
        assert!(matches!(err, ValidationError::ArgType { .. }));
    }

    #[test]
    fn test_bound_clone_evaluates_concurrently() {
        let registry = math_registry();
        let ctx = AppContext::new("in-value-stream");
        let bound = registry
            .bind(
                "math:floor",
                &[ArgExpr::of(AttributeType::Double)],
                &ConfigReader::new(),
                &ctx,
            )
            .unwrap();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let b = bound.clone();
                std::thread::spawn(move || b.evaluate(&Value::Double(f64::from(i) + 0.5)))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Ok(Value::Double(i as f64)));
        }
    }
}
