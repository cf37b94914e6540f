//! The JNI entry points. The JVM binds these by name to the native
//! methods of the `LinenJNI` class, so the function names must not change
//! (see [`crate::binding`]).

use crate::errors::Result;
use crate::greeting::{say_hello, string_msg};
use jni::objects::{JObject, JString};
use jni::sys::jstring;
use jni::JNIEnv;
use tracing::{debug, error};

/// Prints the greeting line to standard output.
///
/// Java: `public native void sayHello();`
#[no_mangle]
pub extern "system" fn Java_LinenJNI_sayHello<'local>(_env: JNIEnv<'local>, _this: JObject<'local>) {
    say_hello();
}

/// Returns the fixed message as a new `java.lang.String`.
///
/// Java: `public native String getStringMsg();`
///
/// Return values:
/// - A local reference to the string, or `null` if the JVM could not
///   allocate it. In that case the JVM's own exception is left pending
///   for the caller.
#[no_mangle]
pub extern "system" fn Java_LinenJNI_getStringMsg<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    debug!("getStringMsg called");
    match new_message_string(&mut env) {
        Ok(message) => message.into_raw(),
        Err(e) => {
            error!("getStringMsg failed: {e}");
            std::ptr::null_mut()
        }
    }
}

fn new_message_string<'local>(env: &mut JNIEnv<'local>) -> Result<JString<'local>> {
    Ok(env.new_string(string_msg())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::NativeMethod;
    use crate::MESSAGE;
    use jni::{InitArgsBuilder, JNIVersion, JavaVM};
    use std::sync::OnceLock;

    /// Only one JVM may be created per process, so the tests share it.
    fn jvm() -> &'static JavaVM {
        static JVM: OnceLock<JavaVM> = OnceLock::new();
        JVM.get_or_init(|| {
            let args = InitArgsBuilder::new()
                .version(JNIVersion::V8)
                .option("-Xcheck:jni")
                .build()
                .unwrap();
            JavaVM::new(args).unwrap()
        })
    }

    /// Names an exported function, failing to compile if it is renamed.
    macro_rules! exported_name {
        ($f:ident) => {{
            let _ = $f;
            stringify!($f)
        }};
    }

    #[test]
    fn get_string_msg_returns_jvm_string() {
        let mut env = jvm().attach_current_thread().unwrap();
        let caller = unsafe { env.unsafe_clone() };
        let raw = Java_LinenJNI_getStringMsg(caller, JObject::null());
        assert!(!raw.is_null());
        assert!(!env.exception_check().unwrap());

        let message = unsafe { JString::from_raw(raw) };
        let text: String = env.get_string(&message).unwrap().into();
        assert_eq!(text, MESSAGE);
        assert_eq!(text.len(), 14);
    }

    #[test]
    fn get_string_msg_is_idempotent() {
        let mut env = jvm().attach_current_thread().unwrap();
        for _ in 0..3 {
            let caller = unsafe { env.unsafe_clone() };
            let message = unsafe { JString::from_raw(Java_LinenJNI_getStringMsg(caller, JObject::null())) };
            let text: String = env.get_string(&message).unwrap().into();
            assert_eq!(text, "This is a test");
            env.delete_local_ref(message).unwrap();
        }
    }

    #[test]
    fn say_hello_returns_cleanly() {
        let env = jvm().attach_current_thread().unwrap();
        for _ in 0..3 {
            let caller = unsafe { env.unsafe_clone() };
            Java_LinenJNI_sayHello(caller, JObject::null());
        }
        assert!(!env.exception_check().unwrap());
    }

    #[test]
    fn binding_table_names_the_real_exports() {
        assert_eq!(NativeMethod::SayHello.symbol(), exported_name!(Java_LinenJNI_sayHello));
        assert_eq!(NativeMethod::GetStringMsg.symbol(), exported_name!(Java_LinenJNI_getStringMsg));
    }
}
