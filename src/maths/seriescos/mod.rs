mod cos;
mod factorial;
mod pow;

pub use cos::cos;
pub use factorial::factorial;
pub use pow::pow;
