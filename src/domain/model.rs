use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Computation {
    pub input: i64,
    pub factorial: u64,
    pub sum: f64,
}

/// Result of one trigger. Every trigger builds a fresh value; nothing from a
/// previous attempt survives into the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Ready(Computation),
    Failed { message: String },
}

impl Outcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, Outcome::Ready(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ready(c) => write!(
                f,
                "factorial of {} = {}, sum of list = {}",
                c.input, c.factorial, c.sum
            ),
            Outcome::Failed { message } => write!(f, "error: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        let ready = Outcome::Ready(Computation {
            input: 5,
            factorial: 120,
            sum: 6.0,
        });
        assert_eq!(ready.to_string(), "factorial of 5 = 120, sum of list = 6");

        let failed = Outcome::Failed {
            message: "the number list cannot be empty".to_string(),
        };
        assert_eq!(failed.to_string(), "error: the number list cannot be empty");
    }

    #[test]
    fn test_outcome_json_shape() {
        let ready = Outcome::Ready(Computation {
            input: 3,
            factorial: 6,
            sum: 1.5,
        });
        let json = serde_json::to_value(&ready).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["factorial"], 6);
    }
}
