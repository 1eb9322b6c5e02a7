use symexpr_rs::{Bindings, Expression};

fn main() {
    pretty_env_logger::init();

    let x = Expression::variable("x");
    let square = &x * &x;

    let replaced = square.substitute("x", &Expression::constant(3.0));
    println!("{} with x := 3 becomes {}", square, replaced);
    println!("value: {}", replaced.evaluate(&Bindings::new()).unwrap());

    let shifted = square.substitute("x", &(&x + Expression::constant(1.0)));
    let bindings = Bindings::from([("x".to_string(), 2.0)]);
    println!("{} with x := (x + 1) becomes {}", square, shifted);
    println!("at x = 2: {}", shifted.evaluate(&bindings).unwrap());
}
