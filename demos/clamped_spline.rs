extern crate cubic_spline;

use cubic_spline::CubicSpline;

fn main() {

    let x = vec![0.0, 1.0, 2.0, 3.0];
    let y = vec![0.0, 4.0, 2.0, 0.0];
    let slopes = [(0.0, -1.0), (1.0, 5.0), (-2.0, -5.0), (-5.0, 1.0)];

    let splines: Vec<CubicSpline> = slopes
        .iter()
        .map(|(slope_start, slope_end)| {
            CubicSpline::clamped(x.clone(), y.clone(), *slope_start, *slope_end).unwrap()
        })
        .collect();

    let x_min = 0.0;
    let x_max = 3.0;
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y1;y2;y3;y4");
    for i in 0..=number_of_steps {
        let t = x_min + step * i as f64;
        let values: Vec<String> = splines
            .iter()
            .map(|spline| format!("{:.2}", spline.interpolate(t).unwrap()))
            .collect();
        println!("{:.2};{}", t, values.join(";"));
    }
}
