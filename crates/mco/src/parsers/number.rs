// nom parser combinators
use nom::character::complete::space0;
use nom::multi::many1;
use nom::number::complete::double;
use nom::sequence::terminated;
use nom::IResult;

/// List of consecutive doubles as a vector of f64 values
pub(crate) fn vector_of_f64(i: &str) -> IResult<&str, Vec<f64>> {
    many1(terminated(double, space0))(i.trim_start())
}

/// First double on the line, ignoring anything that follows it
pub(crate) fn leading_f64(i: &str) -> IResult<&str, f64> {
    double(i.trim_start())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_vectors() {
        assert_eq!(
            vector_of_f64("0.01 0.01 1e2").unwrap().1,
            vec![0.01, 0.01, 100.0]
        );
    }

    #[test]
    fn leading_value_only() {
        assert_eq!(leading_f64(" 0.0253 extra").unwrap().1, 0.0253);
        assert!(leading_f64("pencil").is_err());
    }
}
