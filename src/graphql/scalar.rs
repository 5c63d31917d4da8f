use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use jiff::Timestamp;
use jiff::civil;

/// Release date wire type.
///
/// Serializes as integer epoch seconds. Accepts an integer epoch, an
/// RFC 3339 timestamp, a `YYYY-MM-DD` civil date, or the `MM-DD-YYYY`
/// form found in older catalog exports; bare dates are read as
/// midnight UTC.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Date(pub Timestamp);

#[Scalar(name = "Date")]
impl ScalarType for Date {
    fn parse(value: Value) -> InputValueResult<Self> {
        match value {
            Value::Number(n) => {
                let secs = n
                    .as_i64()
                    .ok_or_else(|| InputValueError::custom("epoch seconds out of range"))?;
                let ts = Timestamp::from_second(secs)
                    .map_err(|e| InputValueError::custom(format!("invalid epoch: {e}")))?;
                Ok(Date(ts))
            }
            Value::String(s) => parse_date_str(&s)
                .map(Date)
                .map_err(|e| InputValueError::custom(format!("unparsable date '{s}': {e}"))),
            other => Err(InputValueError::expected_type(other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::Number(self.0.as_second().into())
    }
}

fn parse_date_str(s: &str) -> Result<Timestamp, jiff::Error> {
    if let Ok(ts) = s.parse::<Timestamp>() {
        return Ok(ts);
    }
    let date = s.parse::<civil::Date>().or_else(|_| civil::Date::strptime("%m-%d-%Y", s))?;
    Ok(date.in_tz("UTC")?.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_integers_round_trip() {
        let parsed = <Date as ScalarType>::parse(Value::Number(434592000.into())).unwrap();
        assert_eq!(parsed.to_value(), Value::Number(434592000.into()));
    }

    #[test]
    fn civil_dates_read_as_midnight_utc() {
        let parsed = <Date as ScalarType>::parse(Value::String("1983-10-10".into())).unwrap();
        assert_eq!(parsed.0.as_second(), 434592000);
    }

    #[test]
    fn legacy_month_first_form_is_accepted() {
        let a = <Date as ScalarType>::parse(Value::String("10-10-1983".into())).unwrap();
        let b = <Date as ScalarType>::parse(Value::String("1983-10-10".into())).unwrap();
        assert_eq!(a.0, b.0);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(<Date as ScalarType>::parse(Value::String("not a date".into())).is_err());
        assert!(<Date as ScalarType>::parse(Value::Boolean(true)).is_err());
    }
}
