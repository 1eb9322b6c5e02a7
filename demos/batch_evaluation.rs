use symexpr_rs::{Bindings, Expression};

fn main() {
    pretty_env_logger::init();

    let price = Expression::variable("price");
    let fee = Expression::variable("fee");
    let total = &price + &price * &fee;

    let environments = vec![
        Bindings::from([("price".to_string(), 120.0), ("fee".to_string(), 0.05)]),
        Bindings::from([("price".to_string(), 80.0), ("fee".to_string(), 0.1)]),
        Bindings::from([("price".to_string(), 42.0)]),
    ];

    for (i, result) in total.evaluate_batch(&environments).into_iter().enumerate() {
        match result {
            Ok(value) => println!("environment {}: {} = {}", i, total, value),
            Err(err) => println!("environment {}: error: {}", i, err),
        }
    }
}
