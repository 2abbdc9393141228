#[macro_export]
/// Macro to reduce boilerplate for types whose input value is their `Display` form.
macro_rules! impl_field_value_for_display {
    ($($t:ty),*) => {
        $(
            impl FieldValue for $t {
                fn to_field_value(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}
