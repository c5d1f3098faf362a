use crate::func::Func::{self, *};

impl Func {
    /// Produce a human readable string for this function, with `arg` as the
    /// argument. Composition substitutes the rendering of the inner function
    /// as the argument of the outer one.
    pub fn render(&self, arg: &str) -> String {
        match self {
            Polynomial(p) => p.render(arg),
            Sum(f, g) => format!("{} + {}", f.render(arg), g.render(arg)),
            Product(f, g) => format!("{} * {}", f.render(arg), g.render(arg)),
            Compose(f, g) => f.render(&g.render(arg)),
            Power(n) => format!("{arg} ^ {n}"),
            Log => format!("log({arg})"),
            Exponential => format!("e ^ {arg}"),
            Sin => format!("sin({arg})"),
            Cos => format!("cos({arg})"),
            Symbolic(name) => format!("{name}({arg})"),
        }
    }
}

impl std::fmt::Display for Func {
    /// Renders the function with `x` as the argument.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render("x"))
    }
}
