use anyhow::Result;
use numvec::{Operand, Vector};

fn main() -> Result<()> {
    env_logger::init();

    let v = Vector::new(vec![2.0, 1.0, 2.0]);
    let d = Vector::new(vec![0.5, 1.0, 0.5]);

    let parallel = v.project_onto(&d)?;
    let orthogonal = v.reject_from(&d)?;

    println!("v           = {}", v);
    println!("direction   = {}", d);
    println!("v . d       = {}", v.dot(&d));
    println!("projection  = {}", parallel);
    println!("rejection   = {}", orthogonal);
    println!("recomposed  = {}", &parallel + &orthogonal);

    // Dispatch on an explicitly tagged operand.
    println!("1 + v       = {}", Operand::Scalar(1.0).add(&v));
    match Operand::Scalar(3.0).project_onto(&d) {
        Ok(p) => println!("3 // d      = {}", p),
        Err(err) => println!("3 // d      refused: {}", err),
    }

    Ok(())
}
