//! Helper macro for declaring port error enums.
//!
//! Each variant gets a snake_case constructor whose fields accept anything
//! convertible into the declared type, so adapters can write
//! `EmployeeDirectoryError::query(err.to_string())` or pass a `&str`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
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
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for generated port error constructors.
    define_port_error! {
        pub enum DirectoryProbeError {
            Timeout => "directory probe timed out",
            Rejected { message: String } => "directory rejected probe: {message}",
            Partial { table: String, rows: u64 } => "{table} held {rows} rows",
        }
    }

    #[test]
    fn unit_variants_get_argument_free_constructors() {
        assert_eq!(DirectoryProbeError::timeout(), DirectoryProbeError::Timeout);
    }

    #[test]
    fn string_fields_accept_borrowed_input() {
        let err = DirectoryProbeError::rejected("read-only replica");
        assert_eq!(err.to_string(), "directory rejected probe: read-only replica");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = DirectoryProbeError::partial("employees", 8_u64);
        assert_eq!(err.to_string(), "employees held 8 rows");
    }
}
