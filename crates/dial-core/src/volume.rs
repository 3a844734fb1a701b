/// Receives every value change, local or adopted from another context, and
/// applies it to whatever is playing.
pub trait VolumeSink {
    fn set_volume(&self, value: f64);
}
