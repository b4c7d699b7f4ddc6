use serde::{Serialize, Serializer};

/// The uniform result envelope returned by every gateway operation.
///
/// Expected failures (missing rows, zero rows affected, mutations against a
/// view) and infrastructure faults alike end up as a `Failure` carrying one or
/// more human-readable messages; callers branch on the variant rather than on
/// errors.
///
/// On the wire it has the shape
/// `{ "success": bool, "data": T | null, "errorMessages": [string] }`. A failed
/// outcome fills `data` from [`Payload::vacant`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The operation completed and produced a payload
    Success(T),
    /// Nothing happened; see the messages
    Failure(Vec<String>),
}

impl<T> Outcome<T> {
    /// A failure with a single message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(vec![message.into()])
    }

    /// Whether the operation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The payload, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Consume the envelope, keeping only the payload.
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// The failure messages; empty on success.
    pub fn error_messages(&self) -> &[String] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(messages) => messages,
        }
    }

    /// Convert into a standard `Result`.
    pub fn into_result(self) -> Result<T, Vec<String>> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(messages) => Err(messages),
        }
    }

    /// Transform the payload of a successful outcome.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(data) => Outcome::Success(f(data)),
            Self::Failure(messages) => Outcome::Failure(messages),
        }
    }
}

impl<T> From<Result<T, Vec<String>>> for Outcome<T> {
    fn from(value: Result<T, Vec<String>>) -> Self {
        match value {
            Ok(data) => Self::Success(data),
            Err(messages) => Self::Failure(messages),
        }
    }
}

/// A type that can be carried as the `data` of an [`Outcome`].
///
/// Single rows have nothing to show on failure and serialize `null`. Row sets
/// fail empty and delete flags fail `false`.
pub trait Payload {
    /// The `data` reported alongside a failure.
    fn vacant() -> Option<Self>
    where
        Self: Sized,
    {
        None
    }
}

impl<T> Payload for Vec<T> {
    fn vacant() -> Option<Self> {
        Some(Vec::new())
    }
}

impl Payload for bool {
    fn vacant() -> Option<Self> {
        Some(false)
    }
}

// Serialization goes through this flattened view of the enum.

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeDto<'a, T> {
    success: bool,
    data: Option<&'a T>,
    error_messages: &'a [String],
}

impl<T: Serialize + Payload> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(data) => OutcomeDto {
                success: true,
                data: Some(data),
                error_messages: &[],
            }
            .serialize(serializer),
            Self::Failure(messages) => {
                let vacant = T::vacant();
                OutcomeDto {
                    success: false,
                    data: vacant.as_ref(),
                    error_messages: messages,
                }
                .serialize(serializer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let outcome = Outcome::Success(vec![1, 2]);
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({ "success": true, "data": [1, 2], "errorMessages": [] })
        );
    }

    #[derive(Serialize)]
    struct Row {
        id: i64,
    }

    impl Payload for Row {}

    #[test]
    fn test_failure_shape() {
        let outcome: Outcome<Row> = Outcome::failure("Shipper with ID 9 not found");
        assert!(!outcome.is_success());
        assert!(outcome.data().is_none());
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "success": false,
                "data": null,
                "errorMessages": ["Shipper with ID 9 not found"]
            })
        );
    }

    #[test]
    fn test_failed_lists_and_flags_keep_their_shape() {
        let listed: Outcome<Vec<Row>> = Outcome::failure("no such table: Shippers");
        assert_eq!(
            serde_json::to_value(&listed).unwrap(),
            json!({
                "success": false,
                "data": [],
                "errorMessages": ["no such table: Shippers"]
            })
        );

        let deleted: Outcome<bool> = Outcome::failure("Category with ID 999 not found");
        assert_eq!(
            serde_json::to_value(&deleted).unwrap(),
            json!({
                "success": false,
                "data": false,
                "errorMessages": ["Category with ID 999 not found"]
            })
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Outcome::Success(3).map(|x| x * 2).into_result(), Ok(6));
        let failed: Outcome<i32> = Outcome::Failure(vec!["a".into(), "b".into()]);
        assert_eq!(failed.error_messages().len(), 2);
        assert_eq!(failed.into_result(), Err(vec!["a".to_owned(), "b".to_owned()]));
    }
}
