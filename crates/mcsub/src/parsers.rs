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
    fn tab_separated_rows() {
        assert_eq!(
            vector_of_f64("0.005\t10\t20\t30").unwrap().1,
            vec![0.005, 10.0, 20.0, 30.0]
        );
    }

    #[test]
    fn leading_value_only() {
        assert_eq!(leading_f64("0.02 ").unwrap().1, 0.02);
        assert!(leading_f64("description").is_err());
    }
}
