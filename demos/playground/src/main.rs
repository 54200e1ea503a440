use argh::FromArgs;

use cns_math::{magnitude, normalize, Vector3D};

#[derive(FromArgs)]
/// Print the magnitude of the difference between two vectors
struct Args {
    /// first vector as `x,y,z`
    #[argh(
        option,
        short = 'a',
        default = "Vector3D::new(1.0, 2.0, 3.0)",
        from_str_fn(parse_vector)
    )]
    a: Vector3D,

    /// second vector as `x,y,z`
    #[argh(
        option,
        short = 'b',
        default = "Vector3D::new(-3.0, 2.0, -1.0)",
        from_str_fn(parse_vector)
    )]
    b: Vector3D,
}

/// Parse a vector from three comma-separated components, e.g. `1,2.5,-3`.
fn parse_vector(value: &str) -> Result<Vector3D, String> {
    let components = value
        .split(',')
        .map(|c| {
            c.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid component {c:?}: {e}"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match components.as_slice() {
        [x, y, z] => Ok(Vector3D::new(*x, *y, *z)),
        _ => Err(format!(
            "expected 3 comma-separated components, got {}",
            components.len()
        )),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();
    log::info!("a = {}, b = {}", args.a, args.b);

    let difference = args.a - args.b;
    log::debug!("a - b = {difference}");

    println!("{}", magnitude(&difference));

    // fails for identical inputs: the zero vector has no direction
    let direction = normalize(&difference)?;
    log::info!("direction of a - b = {direction}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vector() {
        assert_eq!(parse_vector("1,2,3"), Ok(Vector3D::new(1.0, 2.0, 3.0)));
        assert_eq!(
            parse_vector(" -3, 2.5 ,-1"),
            Ok(Vector3D::new(-3.0, 2.5, -1.0))
        );
    }

    #[test]
    fn test_parse_vector_invalid() {
        assert!(parse_vector("1,2").is_err());
        assert!(parse_vector("1,2,3,4").is_err());
        assert!(parse_vector("1,two,3").is_err());
    }
}
