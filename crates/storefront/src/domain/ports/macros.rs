//! Defines helper macros for generating domain port error enums.

macro_rules! define_port_error {
    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            /// Construct the matching error variant.
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($(#[$field_meta:meta])* $field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($(#[$field_meta])* $field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant { $($field : $ty),* });
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        /// Errors used to exercise the macro.
        pub enum ExamplePortError {
            /// Single string field.
            Missing {
                /// Storage key.
                key: String
            } => "missing: {key}",
            /// Single numeric field.
            Truncated {
                /// Bytes written.
                written: u32
            } => "truncated after {written} bytes",
            /// Mixed fields.
            Rejected {
                /// Storage key.
                key: String,
                /// Bytes written.
                written: u32
            } => "rejected {key} ({written})",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::missing("wishlist");
        assert_eq!(err.to_string(), "missing: wishlist");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = ExamplePortError::truncated(42_u32);
        assert_eq!(err.to_string(), "truncated after 42 bytes");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = ExamplePortError::rejected("products", 7_u32);
        assert_eq!(err.to_string(), "rejected products (7)");
    }
}
