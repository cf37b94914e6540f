//! Describes the native methods this library provides to the JVM, so
//! hosts and tooling can check the Java declarations against the
//! symbols we actually export.

use crate::JAVA_CLASS;
use std::fmt::Write;
use strum::{Display, EnumIter, IntoStaticStr};

/// A native method declared on the Java class.
/// `Display` yields the Java method name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumIter, IntoStaticStr)]
pub enum NativeMethod {
    /// `native void sayHello()`
    #[strum(serialize = "sayHello")]
    SayHello,
    /// `native String getStringMsg()`
    #[strum(serialize = "getStringMsg")]
    GetStringMsg,
}

impl NativeMethod {
    /// The Java method name.
    pub fn java_name(self) -> &'static str {
        self.into()
    }

    /// The JNI type signature of the method.
    pub fn signature(self) -> &'static str {
        match self {
            NativeMethod::SayHello => "()V",
            NativeMethod::GetStringMsg => "()Ljava/lang/String;",
        }
    }

    /// The exported symbol the JVM looks up for this method.
    pub fn symbol(self) -> String {
        mangle_jni_name(JAVA_CLASS, self.java_name())
    }
}

/// Builds the short JNI symbol name for `method` on `class`.
///
/// `class` may be given with either `/` or `.` as the package separator.
/// Characters that are not valid in a C identifier are escaped the way
/// the JVM expects (`_1` for `_`, `_2` for `;`, `_3` for `[`, and
/// `_0xxxx` for anything outside ASCII alphanumerics).
pub fn mangle_jni_name(class: &str, method: &str) -> String {
    let mut out = String::from("Java_");
    escape_into(&mut out, class, true);
    out.push('_');
    escape_into(&mut out, method, false);
    out
}

fn escape_into(out: &mut String, name: &str, is_class: bool) {
    for c in name.chars() {
        match c {
            '/' | '.' if is_class => out.push('_'),
            '_' => out.push_str("_1"),
            ';' => out.push_str("_2"),
            '[' => out.push_str("_3"),
            c if c.is_ascii_alphanumeric() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    // Writing to a String cannot fail.
                    let _ = write!(out, "_0{unit:04x}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn symbols_match_exports() {
        assert_eq!(NativeMethod::SayHello.symbol(), "Java_LinenJNI_sayHello");
        assert_eq!(NativeMethod::GetStringMsg.symbol(), "Java_LinenJNI_getStringMsg");
    }

    #[test]
    fn display_is_java_name() {
        assert_eq!(NativeMethod::SayHello.to_string(), "sayHello");
        assert_eq!(NativeMethod::GetStringMsg.java_name(), "getStringMsg");
    }

    #[test]
    fn signatures() {
        assert_eq!(NativeMethod::SayHello.signature(), "()V");
        assert_eq!(NativeMethod::GetStringMsg.signature(), "()Ljava/lang/String;");
    }

    #[test]
    fn every_method_is_listed() {
        let names: Vec<&str> = NativeMethod::iter().map(NativeMethod::java_name).collect();
        assert_eq!(names, vec!["sayHello", "getStringMsg"]);
    }

    #[test]
    fn packages_and_escapes() {
        assert_eq!(
            mangle_jni_name("co/nclk/linen/connector/LinenJNI", "sayHello"),
            "Java_co_nclk_linen_connector_LinenJNI_sayHello"
        );
        assert_eq!(
            mangle_jni_name("co.nclk.Linen_JNI", "get_msg"),
            "Java_co_nclk_Linen_1JNI_get_1msg"
        );
        assert_eq!(mangle_jni_name("Caf\u{e9}", "m"), "Java_Caf_000e9_m");
    }
}
