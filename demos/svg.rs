use crspline::{polyline_length, sample_spline, BoundingBox, DEFAULT_SAMPLES_PER_SPAN};
use nalgebra::Vector2;

fn main() {
    let control_points = [
        Vector2::new(50.0, 0.0),
        Vector2::new(200.0, 33.0),
        Vector2::new(0.0, 66.0),
        Vector2::new(50.0, 100.0),
    ];
    let spline = sample_spline(&control_points, DEFAULT_SAMPLES_PER_SPAN).unwrap();
    let bb = BoundingBox::from_points(&spline).unwrap();
    let size = bb.size();

    println!(
        "<svg viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
        bb.min.x, bb.min.y, size.x, size.y
    );
    print!("<polyline fill=\"none\" stroke=\"purple\" stroke-width=\"2\" points=\"");
    for point in spline.iter() {
        print!("{},{} ", point.x, point.y);
    }
    println!("\"/>");
    println!("</svg>");

    eprintln!("spline length: {}", polyline_length(&spline));
}
