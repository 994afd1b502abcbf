/// Result of a gateway call.
///
/// The gateway never fails its caller: when the provider is unreachable or its
/// reply is unusable, the caller receives a fallback value tagged with the
/// reason, so degradation is observable rather than silent.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Fresh(T),
    Degraded { value: T, reason: String },
}

impl<T> Outcome<T> {
    pub fn degraded(value: T, reason: impl Into<String>) -> Self {
        Outcome::Degraded {
            value,
            reason: reason.into(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded { .. })
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Fresh(value) | Outcome::Degraded { value, .. } => value,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Fresh(_) => None,
            Outcome::Degraded { reason, .. } => Some(reason),
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Fresh(value) | Outcome::Degraded { value, .. } => value,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Fresh(value) => Outcome::Fresh(f(value)),
            Outcome::Degraded { value, reason } => Outcome::Degraded {
                value: f(value),
                reason,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let fresh = Outcome::Fresh(3);
        assert!(!fresh.is_degraded());
        assert_eq!(fresh.reason(), None);

        let degraded = Outcome::degraded(4, "timeout").map(|v| v * 2);
        assert!(degraded.is_degraded());
        assert_eq!(degraded.reason(), Some("timeout"));
        assert_eq!(*degraded.value(), 8);
        assert_eq!(degraded.into_value(), 8);
    }
}
