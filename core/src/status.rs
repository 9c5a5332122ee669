//! HTTP status expectations.

use std::fmt;

/// A status code the caller expects the server to return.
///
/// Named variants cover the codes the endpoints assert by default plus the
/// usual negative-test codes; `Other` carries anything else. Equality is by
/// numeric code, so `Other(200) == Ok`.
#[derive(Debug, Clone, Copy)]
pub enum HttpStatus {
    Ok,
    Created,
    NoContent,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    UnprocessableEntity,
    InternalServerError,
    Other(u16),
}

impl HttpStatus {
    pub fn code(self) -> u16 {
        match self {
            HttpStatus::Ok => 200,
            HttpStatus::Created => 201,
            HttpStatus::NoContent => 204,
            HttpStatus::BadRequest => 400,
            HttpStatus::Unauthorized => 401,
            HttpStatus::Forbidden => 403,
            HttpStatus::NotFound => 404,
            HttpStatus::UnprocessableEntity => 422,
            HttpStatus::InternalServerError => 500,
            HttpStatus::Other(code) => code,
        }
    }

    /// Human label, e.g. `"CREATED"`. Unknown codes have none.
    pub fn label(self) -> Option<&'static str> {
        match self {
            HttpStatus::Ok => Some("OK"),
            HttpStatus::Created => Some("CREATED"),
            HttpStatus::NoContent => Some("NO_CONTENT"),
            HttpStatus::BadRequest => Some("BAD_REQUEST"),
            HttpStatus::Unauthorized => Some("UNAUTHORIZED"),
            HttpStatus::Forbidden => Some("FORBIDDEN"),
            HttpStatus::NotFound => Some("NOT_FOUND"),
            HttpStatus::UnprocessableEntity => Some("UNPROCESSABLE_ENTITY"),
            HttpStatus::InternalServerError => Some("INTERNAL_SERVER_ERROR"),
            HttpStatus::Other(_) => None,
        }
    }

    pub fn matches(self, code: u16) -> bool {
        self.code() == code
    }
}

impl From<u16> for HttpStatus {
    fn from(code: u16) -> Self {
        match code {
            200 => HttpStatus::Ok,
            201 => HttpStatus::Created,
            204 => HttpStatus::NoContent,
            400 => HttpStatus::BadRequest,
            401 => HttpStatus::Unauthorized,
            403 => HttpStatus::Forbidden,
            404 => HttpStatus::NotFound,
            422 => HttpStatus::UnprocessableEntity,
            500 => HttpStatus::InternalServerError,
            other => HttpStatus::Other(other),
        }
    }
}

impl PartialEq for HttpStatus {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for HttpStatus {}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{} {label}", self.code()),
            None => write!(f, "{}", self.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_named_variants() {
        assert!(matches!(HttpStatus::from(201), HttpStatus::Created));
        assert!(matches!(HttpStatus::from(404), HttpStatus::NotFound));
        assert!(matches!(HttpStatus::from(418), HttpStatus::Other(418)));
    }

    #[test]
    fn equality_is_by_code() {
        assert_eq!(HttpStatus::Other(200), HttpStatus::Ok);
        assert_ne!(HttpStatus::Ok, HttpStatus::Created);
    }

    #[test]
    fn display_includes_label_when_known() {
        assert_eq!(HttpStatus::Created.to_string(), "201 CREATED");
        assert_eq!(HttpStatus::Other(418).to_string(), "418");
    }
}
