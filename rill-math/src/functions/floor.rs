//! math:floor

use rill_plugin::prelude::*;

/// Arity-1 scalar function returning the largest double value that is less
/// than or equal to its argument and is equal to a mathematical integer.
///
/// Accepts Int/Long/Float/Double, always returns Double. Stateless: the
/// lifecycle and checkpoint hooks keep their no-op defaults.
pub struct Floor;

const QUALIFIED: &str = "math:floor";

static FLOOR_ARGS: [ArgMeta; 1] = [ArgMeta::new(
    "p1",
    &AttributeType::NUMERIC,
    "The value whose floor should be found",
)];
static FLOOR_EXAMPLES: [&str; 2] = ["math:floor(10.23) returns 10.0", "math:floor(-2.5) returns -3.0"];

impl ScalarFunction for Floor {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            namespace: "math",
            name: "floor",
            description: "Returns the largest (closest to positive infinity) double value that \
                          is less than or equal to p1 and is equal to a mathematical integer",
            args: &FLOOR_ARGS,
            returns: AttributeType::Double,
            examples: &FLOOR_EXAMPLES,
        }
    }

    fn return_type(&self) -> AttributeType {
        AttributeType::Double
    }

    fn validate(
        &self,
        args: &[ArgExpr],
        _config: &ConfigReader,
        _ctx: &AppContext,
    ) -> Result<(), ValidationError> {
        if args.len() != 1 {
            return Err(ValidationError::arg_count(QUALIFIED, 1, args.len()));
        }
        let declared = args[0].return_type();
        if !declared.is_numeric() {
            return Err(ValidationError::arg_type(
                QUALIFIED,
                "p1",
                &AttributeType::NUMERIC,
                declared,
            ));
        }
        Ok(())
    }

    fn evaluate(&self, value: &Value) -> Result<Value, RuntimeError> {
        let widened = match value {
            Value::Int(i) => f64::from(*i),
            Value::Long(l) => *l as f64,
            Value::Float(f) => f64::from(*f),
            Value::Double(d) => *d,
            Value::Null => return Err(RuntimeError::null_input(QUALIFIED)),
            // Validation restricts declared kinds to the numeric set; a
            // runtime value outside it is a host bug and fails loudly.
            other => return Err(RuntimeError::type_mismatch(QUALIFIED, other.type_name())),
        };
        Ok(Value::Double(widened.floor()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> AppContext {
        AppContext::new("floor-tests")
    }

    fn validate_with(kinds: &[AttributeType]) -> Result<(), ValidationError> {
        let args: Vec<ArgExpr> = kinds.iter().map(|k| ArgExpr::of(*k)).collect();
        Floor.validate(&args, &ConfigReader::new(), &ctx())
    }

    mod validation {
        use super::*;

        #[test]
        fn test_accepts_each_numeric_kind() {
            for kind in AttributeType::NUMERIC {
                assert!(validate_with(&[kind]).is_ok(), "rejected {kind}");
            }
        }

        #[test]
        fn test_rejects_zero_arguments() {
            let err = validate_with(&[]).unwrap_err();
            assert!(matches!(
                err,
                ValidationError::ArgCount {
                    expected: 1,
                    found: 0,
                    ..
                }
            ));
        }

        #[test]
        fn test_rejects_two_arguments() {
            let err = validate_with(&[AttributeType::Double, AttributeType::Double]).unwrap_err();
            assert!(matches!(err, ValidationError::ArgCount { found: 2, .. }));
        }

        #[test]
        fn test_rejects_text_argument() {
            let err = validate_with(&[AttributeType::Text]).unwrap_err();
            assert!(matches!(
                err,
                ValidationError::ArgType {
                    found: AttributeType::Text,
                    ..
                }
            ));
        }

        #[test]
        fn test_rejects_bool_argument() {
            assert!(validate_with(&[AttributeType::Bool]).is_err());
        }
    }

    mod evaluation {
        use super::*;

        #[test]
        fn test_double_input() {
            assert_eq!(
                Floor.evaluate(&Value::Double(10.23)),
                Ok(Value::Double(10.0))
            );
        }

        #[test]
        fn test_int_input() {
            assert_eq!(Floor.evaluate(&Value::Int(10)), Ok(Value::Double(10.0)));
        }

        #[test]
        fn test_long_input() {
            assert_eq!(Floor.evaluate(&Value::Long(-1)), Ok(Value::Double(-1.0)));
        }

        #[test]
        fn test_float_input() {
            assert_eq!(Floor.evaluate(&Value::Float(3.7)), Ok(Value::Double(3.0)));
        }

        #[test]
        fn test_negative_floors_toward_negative_infinity() {
            assert_eq!(
                Floor.evaluate(&Value::Double(-2.5)),
                Ok(Value::Double(-3.0))
            );
        }

        #[test]
        fn test_integral_input_unchanged() {
            assert_eq!(Floor.evaluate(&Value::Double(2.0)), Ok(Value::Double(2.0)));
        }

        #[test]
        fn test_negative_zero() {
            let result = Floor.evaluate(&Value::Double(-0.0)).unwrap();
            assert_eq!(result.as_f64(), Some(0.0));
        }

        #[test]
        fn test_null_input_fails() {
            let err = Floor.evaluate(&Value::Null).unwrap_err();
            assert!(matches!(err, RuntimeError::NullInput { .. }));
        }

        #[test]
        fn test_unexpected_runtime_kind_fails() {
            let err = Floor.evaluate(&Value::Text("10.23".into())).unwrap_err();
            assert!(matches!(err, RuntimeError::TypeMismatch { .. }));
        }

        #[test]
        fn test_idempotent() {
            let input = Value::Double(10.23);
            assert_eq!(Floor.evaluate(&input), Floor.evaluate(&input));
        }

        #[test]
        fn test_large_long_widens() {
            // Beyond f64's exact-integer range; floor of the widened value.
            let big = (1i64 << 62) + 1;
            let result = Floor.evaluate(&Value::Long(big)).unwrap();
            assert_eq!(result.as_f64(), Some((big as f64).floor()));
        }
    }

    mod contract {
        use super::*;

        #[test]
        fn test_return_type_is_double() {
            assert_eq!(Floor.return_type(), AttributeType::Double);
        }

        #[test]
        fn test_qualified_name() {
            assert_eq!(Floor.meta().qualified_name(), "math:floor");
        }

        #[test]
        fn test_snapshot_empty_and_restore_noop() {
            let snapshot = Floor.snapshot_state();
            assert!(snapshot.is_empty());
            Floor.restore_state(&snapshot);
            assert_eq!(
                Floor.evaluate(&Value::Double(1.2)),
                Ok(Value::Double(1.0))
            );
        }

        #[test]
        fn test_evaluate_many_single_argument() {
            assert_eq!(
                Floor.evaluate_many(&[Value::Double(10.23)]),
                Ok(Value::Double(10.0))
            );
        }
    }
}
