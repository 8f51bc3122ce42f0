use nvec::{Vector, VectorSet, cross, distance, dot};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut set: VectorSet = vec![
        Vector::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
        Vector::from([7.0, 8.0, 9.0]),
        Vector::from([10.0]),
    ]
    .into();
    let sum = set.sum().unwrap();
    println!("sum = {sum}");

    let u = Vector::from([1.0, 0.0, 0.0]);
    let v = Vector::from([0.0, 1.0, 0.0]);
    println!("u . v = {}, |u - v| = {}", dot(&u, &v), distance(&u, &v));
    println!("u x v = {}", cross(&u, &v).unwrap());

    // logs a debug event and prints the error
    if let Err(e) = cross(&sum, &u) {
        println!("error: {e}");
    }
}
