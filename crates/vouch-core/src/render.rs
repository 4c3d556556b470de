//! Value rendering used in failure messages.
//!
//! Messages are asserted on verbatim, so rendering is fixed here instead of
//! leaning on `Debug`/`Display`, whose float output varies by magnitude.

/// Renders a value the way it appears inside failure messages.
pub trait Render {
    /// Returns the message form of the value.
    fn render(&self) -> String;
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Render> Render for Option<T> {
    fn render(&self) -> String {
        match self {
            Some(value) => value.render(),
            None => "null".to_string(),
        }
    }
}

impl<T: Render> Render for [T] {
    fn render(&self) -> String {
        let items: Vec<String> = self.iter().map(Render::render).collect();
        format!("[{}]", items.join(", "))
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self) -> String {
        self.as_slice().render()
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn render(&self) -> String {
        self.as_slice().render()
    }
}

impl Render for str {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for String {
    fn render(&self) -> String {
        self.clone()
    }
}

macro_rules! render_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

render_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char);

macro_rules! render_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self) -> String {
                    let value = *self;
                    if value.is_nan() {
                        return "NaN".to_string();
                    }
                    if value.is_infinite() {
                        let name = if value > 0.0 { "Infinity" } else { "-Infinity" };
                        return name.to_string();
                    }
                    let magnitude = value.abs();
                    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
                        format!("{value:?}")
                    } else {
                        scientific(&format!("{value:e}"))
                    }
                }
            }
        )*
    };
}

render_float!(f32, f64);

// `1e-45` -> `1.0E-45`, `3.4028235e38` -> `3.4028235E38`.
fn scientific(lower_exp: &str) -> String {
    match lower_exp.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => lower_exp.to_string(),
    }
}

/// Strips module paths from a Rust type name.
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub fn compress_type(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut token = String::new();
    for ch in raw.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            token.push(ch);
        } else {
            push_last_segment(&mut out, &token);
            token.clear();
            out.push(ch);
        }
    }
    push_last_segment(&mut out, &token);
    out
}

fn push_last_segment(out: &mut String, token: &str) {
    out.push_str(token.rsplit("::").next().unwrap_or(token));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_render_with_fixed_forms() {
        assert_eq!(2.0f32.render(), "2.0");
        assert_eq!(0.99999f32.render(), "0.99999");
        assert_eq!((-0.0f64).render(), "-0.0");
        assert_eq!(f32::MAX.render(), "3.4028235E38");
        assert_eq!(f64::NEG_INFINITY.render(), "-Infinity");
        assert_eq!(f32::NAN.render(), "NaN");
        assert_eq!(1.0e7f64.render(), "1.0E7");
    }

    #[test]
    fn type_names_lose_their_paths() {
        assert_eq!(
            compress_type("alloc::vec::Vec<alloc::string::String>"),
            "Vec<String>"
        );
        assert_eq!(compress_type("&str"), "&str");
    }
}
