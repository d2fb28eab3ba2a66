use std::fmt;

/// Opaque handle types owned by the host graphics/windowing binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleKind {
    Element,
    Canvas,
    Context,
    Program,
    Shader,
    Buffer,
    UniformLocation,
}

impl HandleKind {
    pub fn name(self) -> &'static str {
        match self {
            HandleKind::Element => "element",
            HandleKind::Canvas => "canvas",
            HandleKind::Context => "context",
            HandleKind::Program => "program",
            HandleKind::Shader => "shader",
            HandleKind::Buffer => "buffer",
            HandleKind::UniformLocation => "uniform location",
        }
    }
}

/// A handle passed across the host boundary. Nothing about its internals is
/// assumed beyond its kind and an identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HostHandle {
    pub kind: HandleKind,
    pub id: u32,
}

impl HostHandle {
    pub fn new(kind: HandleKind, id: u32) -> Self {
        Self { kind, id }
    }
}

/// A dynamically typed value as seen at the host boundary.
///
/// Borrows its payload so that checking a matrix buffer never copies it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value<'a> {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(&'a str),
    Symbol(&'a str),
    Object,
    Function,
    Array(&'a [Value<'a>]),
    Float32Array(&'a [f32]),
    Handle(HostHandle),
}

/// Runtime type name of a [`Value`], used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Symbol,
    Object,
    Function,
    Array,
    Float32Array,
    Handle(HandleKind),
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Undefined => f.write_str("undefined"),
            ValueKind::Null => f.write_str("null"),
            ValueKind::Boolean => f.write_str("boolean"),
            ValueKind::Number => f.write_str("number"),
            ValueKind::String => f.write_str("string"),
            ValueKind::Symbol => f.write_str("symbol"),
            ValueKind::Object => f.write_str("object"),
            ValueKind::Function => f.write_str("function"),
            ValueKind::Array => f.write_str("array"),
            ValueKind::Float32Array => f.write_str("float32 array"),
            ValueKind::Handle(kind) => write!(f, "{} handle", kind.name()),
        }
    }
}

impl<'a> Value<'a> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Object => ValueKind::Object,
            Value::Function => ValueKind::Function,
            Value::Array(_) => ValueKind::Array,
            Value::Float32Array(_) => ValueKind::Float32Array,
            Value::Handle(handle) => ValueKind::Handle(handle.kind),
        }
    }

    /// Null, plain objects, arrays, typed arrays and host handles all count as
    /// objects, matching the host's `typeof` rules.
    pub fn is_object_like(&self) -> bool {
        matches!(
            self,
            Value::Null
                | Value::Object
                | Value::Array(_)
                | Value::Float32Array(_)
                | Value::Handle(_)
        )
    }

    pub fn is_handle(&self, kind: HandleKind) -> bool {
        matches!(self, Value::Handle(handle) if handle.kind == kind)
    }

    /// True for a float32 buffer of exactly `len` elements.
    pub fn is_f32_buffer_of(&self, len: usize) -> bool {
        matches!(self, Value::Float32Array(data) if data.len() == len)
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Symbol(s) => write!(f, "Symbol({s})"),
            Value::Object => f.write_str("[object]"),
            Value::Function => f.write_str("[function]"),
            Value::Array(items) => write!(f, "[array; {}]", items.len()),
            Value::Float32Array(data) => write!(f, "{data:?}"),
            Value::Handle(handle) => write!(f, "<{} #{}>", handle.kind.name(), handle.id),
        }
    }
}

impl From<()> for Value<'_> {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value<'_> {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(s)
    }
}

impl<'a> From<&'a [f32]> for Value<'a> {
    fn from(data: &'a [f32]) -> Self {
        Value::Float32Array(data)
    }
}

impl<'a, const N: usize> From<&'a [f32; N]> for Value<'a> {
    fn from(data: &'a [f32; N]) -> Self {
        Value::Float32Array(data)
    }
}

impl<'a> From<&'a [Value<'a>]> for Value<'a> {
    fn from(items: &'a [Value<'a>]) -> Self {
        Value::Array(items)
    }
}

impl From<HostHandle> for Value<'_> {
    fn from(handle: HostHandle) -> Self {
        Value::Handle(handle)
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
