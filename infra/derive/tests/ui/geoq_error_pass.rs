use geoq_derive::geoq_error;
use std::borrow::Cow;

#[geoq_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseFloatError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Out of range{}: {value}", format_context(.context))]
    OutOfRange { value: f64, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<f64, DemoError> {
    let value = raw.parse::<f64>().context("parsing distance")?;
    if value.is_nan() {
        return Err(DemoError::OutOfRange { value, context: None });
    }
    Ok(value)
}

fn main() {
    let err = parse("abc").unwrap_err();
    assert_eq!(err.kind(), "Parse");
    assert!(err.to_string().contains("(parsing distance)"));

    let internal: DemoError = "boom".into();
    assert_eq!(internal.kind(), "Internal");

    let ranged: Result<(), DemoError> =
        Err(DemoError::OutOfRange { value: 2.0, context: None });
    let ranged = ranged.context("confidence").unwrap_err();
    assert_eq!(ranged.to_string(), "Out of range (confidence): 2");
}
