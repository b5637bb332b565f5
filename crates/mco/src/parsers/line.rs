// nom parser combinators
use nom::bytes::complete::is_not;
use nom::character::complete::space1;
use nom::combinator::opt;
use nom::number::complete::double;
use nom::sequence::preceded;
use nom::IResult;

/// `name n mu_a mu_s g` media definition line (raw cm-based units)
pub(crate) fn medium_line(i: &str) -> IResult<&str, (&str, [f64; 4])> {
    let (i, name) = name_token(i)?;
    let (i, n) = preceded(space1, double)(i)?;
    let (i, mu_a) = preceded(space1, double)(i)?;
    let (i, mu_s) = preceded(space1, double)(i)?;
    let (i, g) = preceded(space1, double)(i)?;
    Ok((i, (name, [n, mu_a, mu_s, g])))
}

/// `name [thickness_cm]` layer line; a missing thickness token denotes a
/// semi-infinite boundary medium
pub(crate) fn layer_line(i: &str) -> IResult<&str, (&str, Option<f64>)> {
    let (i, name) = name_token(i)?;
    let (i, thickness) = opt(preceded(space1, double))(i)?;
    Ok((i, (name, thickness)))
}

/// Medium names run to the first blank
fn name_token(i: &str) -> IResult<&str, &str> {
    is_not(" \t")(i.trim_start())
}
