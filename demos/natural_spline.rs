extern crate cubic_spline;

use cubic_spline::{evaluate, solve_natural};

fn main() {

    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 4.0, 2.0, 0.0];

    let (b, c, d) = solve_natural(&x, &y).unwrap().into_parts();

    let t_min = -1.0;
    let t_max = 5.0;
    let number_of_steps = 60;
    let step = (t_max - t_min) / number_of_steps as f64;

    let t: Vec<f64> = (0..=number_of_steps).map(|i| t_min + step * i as f64).collect();
    let result = evaluate(&x, &y, &b, &c, &d, &t).unwrap();

    println!("x;y");
    for i in 0..=number_of_steps {
        println!("{:.2};{:.2}", t[i], result[i]);
    }
}
