use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use crate::value::{Result, Value};

/// A native method body: receiver plus positional arguments.
#[derive(Clone)]
pub struct Method {
    pub name: &'static str,
    pub arity: usize,
    pub f: Rc<dyn Fn(&Value, &[Value]) -> Result<Value>>,
}

impl Method {
    pub fn call(&self, recv: &Value, args: &[Value]) -> Result<Value> {
        (self.f)(recv, args)
    }
}

macro_rules! count_ids {
    ($($x:ident)*) => {<[&str]>::len(&[$(stringify!($x)),*])};
}

/// Build a `Method` from a receiver binding, argument bindings and a body.
///
/// ```ignore
/// method!("equal?", recv, other => Ok(Value::Bool(recv.identical(other))))
/// ```
macro_rules! method {
    ( $name:literal, $recv:ident $(, $x:ident)* => $body:expr ) => {
        $crate::dispatch::Method {
            name: $name,
            arity: count_ids!($($x)*),
            f: std::rc::Rc::new(
                |$recv: &$crate::value::Value, args: &[$crate::value::Value]| {
                    let [$($x),*] = args else {
                        return Err($crate::value::Error::WrongArgCount {
                            expected: count_ids!($($x)*),
                            found: args.len(),
                        });
                    };
                    $body
                },
            ),
        }
    };
}

impl Debug for Method {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "<NativeMethod {}/{}>", self.name, self.arity)
    }
}
