use log::debug;
use symexpr_rs::{Bindings, Expression};

fn main() {
    pretty_env_logger::init();

    let x = Expression::variable("x");
    let y = Expression::variable("y");

    let linear = (&x + &y) * Expression::constant(2.0);
    let bindings = Bindings::from([("x".to_string(), 10.0), ("y".to_string(), 5.0)]);

    debug!("built expression: {}", linear);
    println!("{} = {}", linear, linear.evaluate(&bindings).unwrap());

    let trig = (x.exp() + y.sin() * y.cos()).ln();
    println!("{} = {}", trig, trig.evaluate(&bindings).unwrap());

    let ratio = &x / (&y - Expression::constant(5.0));
    match ratio.evaluate(&bindings) {
        Ok(value) => println!("{} = {}", ratio, value),
        Err(err) => println!("{} failed: {}", ratio, err),
    }
}
