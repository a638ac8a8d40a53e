extern crate cubic_spline;

use cubic_spline::CubicSpline;

fn main() {

    let spline = CubicSpline::clamped(
        vec![0.0, 1.0, 2.0, 3.0],
        vec![0.0, 1.0, 8.0, 27.0],
        0.0,
        27.0
    ).unwrap();

    let x_min = -1.0;
    let x_max = 5.0;
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!("{:.2};{:.2}", x, spline.extrapolate(x));
    }
}
