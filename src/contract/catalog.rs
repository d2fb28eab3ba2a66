use super::checker::Checker;
use super::value::{HandleKind, Value};
use super::Contracts;

/// The fixed set of named type and shape checkers.
///
/// Every entry is variadic: `catalog.is_mat3.check(&[a, b])` validates both
/// `a` and `b` against the same shape.
#[derive(Clone, Debug)]
pub struct Catalog {
    // Host runtime types
    pub is_boolean: Checker,
    pub is_null: Checker,
    pub is_undefined: Checker,
    pub is_number: Checker,
    pub is_finite: Checker,
    pub is_string: Checker,
    pub is_symbol: Checker,
    pub is_object: Checker,
    pub is_function: Checker,
    pub is_array: Checker,

    // Document elements
    pub is_element: Checker,
    pub is_canvas: Checker,

    // Graphics handles
    pub is_context: Checker,
    pub is_program: Checker,
    pub is_shader: Checker,
    pub is_buffer: Checker,
    pub is_uniform_location: Checker,

    // Float32 vector/matrix shapes
    pub is_vec2: Checker,
    pub is_vec3: Checker,
    pub is_vec4: Checker,
    pub is_mat2: Checker,
    pub is_mat3: Checker,
    pub is_mat4: Checker,
    pub is_quat: Checker,
}

fn handle(contracts: &Contracts, name: &'static str, kind: HandleKind) -> Checker {
    contracts.make_checker(name, move |v| v.is_handle(kind))
}

fn buffer(contracts: &Contracts, name: &'static str, len: usize) -> Checker {
    contracts.make_checker(name, move |v| v.is_f32_buffer_of(len))
}

impl Catalog {
    pub fn new(contracts: &Contracts) -> Self {
        let c = contracts;
        Self {
            is_boolean: c.make_checker("is_boolean", |v| matches!(v, Value::Boolean(_))),
            is_null: c.make_checker("is_null", |v| matches!(v, Value::Null)),
            is_undefined: c.make_checker("is_undefined", |v| matches!(v, Value::Undefined)),
            is_number: c.make_checker("is_number", |v| matches!(v, Value::Number(_))),
            is_finite: c.make_checker("is_finite", |v| {
                matches!(v, Value::Number(n) if n.is_finite())
            }),
            is_string: c.make_checker("is_string", |v| matches!(v, Value::String(_))),
            is_symbol: c.make_checker("is_symbol", |v| matches!(v, Value::Symbol(_))),
            is_object: c.make_checker("is_object", |v| v.is_object_like()),
            is_function: c.make_checker("is_function", |v| matches!(v, Value::Function)),
            is_array: c.make_checker("is_array", |v| matches!(v, Value::Array(_))),

            is_element: handle(c, "is_element", HandleKind::Element),
            is_canvas: handle(c, "is_canvas", HandleKind::Canvas),

            is_context: handle(c, "is_context", HandleKind::Context),
            is_program: handle(c, "is_program", HandleKind::Program),
            is_shader: handle(c, "is_shader", HandleKind::Shader),
            is_buffer: handle(c, "is_buffer", HandleKind::Buffer),
            is_uniform_location: handle(c, "is_uniform_location", HandleKind::UniformLocation),

            is_vec2: buffer(c, "is_vec2", 2),
            is_vec3: buffer(c, "is_vec3", 3),
            is_vec4: buffer(c, "is_vec4", 4),
            is_mat2: buffer(c, "is_mat2", 4),
            is_mat3: buffer(c, "is_mat3", 9),
            is_mat4: buffer(c, "is_mat4", 16),
            is_quat: buffer(c, "is_quat", 4),
        }
    }

    /// Look up a checker by its name, e.g. `"is_mat3"`.
    pub fn get(&self, name: &str) -> Option<&Checker> {
        self.iter().find(|checker| checker.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Checker> {
        [
            &self.is_boolean,
            &self.is_null,
            &self.is_undefined,
            &self.is_number,
            &self.is_finite,
            &self.is_string,
            &self.is_symbol,
            &self.is_object,
            &self.is_function,
            &self.is_array,
            &self.is_element,
            &self.is_canvas,
            &self.is_context,
            &self.is_program,
            &self.is_shader,
            &self.is_buffer,
            &self.is_uniform_location,
            &self.is_vec2,
            &self.is_vec3,
            &self.is_vec4,
            &self.is_mat2,
            &self.is_mat3,
            &self.is_mat4,
            &self.is_quat,
        ]
        .into_iter()
    }
}
