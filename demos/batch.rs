extern crate cubic_spline;

use cubic_spline::CubicSpline;

fn main() {

    let x_min = 0.0;
    let x_max = 5.0;

    let spline = CubicSpline::natural(
        vec![x_min, 1.0, 2.0, x_max],
        vec![0.0, 2.0, 4.0, 10.0]
    ).unwrap();

    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    let mut x_vector = Vec::new();

    for i in 0..=number_of_steps {
        x_vector.push(x_min + step * i as f64);
    }

    let result = spline.batch_interpolate(&x_vector).unwrap();

    println!("x;y");
    for i in 0..=number_of_steps {
        println!("{:.2};{:.2}", x_vector[i], result[i]);
    }
}
