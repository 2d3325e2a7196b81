mod f32;
mod f64;
