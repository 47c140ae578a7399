//! Configuration access port trait.

/// Key/value configuration grouped into sections. Getters return `None` for
/// a missing or unparsable value; callers decide whether that is an error.
pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_f64(&self, section: &str, key: &str) -> Option<f64>;
    fn get_usize(&self, section: &str, key: &str) -> Option<usize>;
    fn get_bool(&self, section: &str, key: &str) -> Option<bool>;
}
