//! Shared test fixtures: a scripted runtime and a populated namespace table.

use opal_backend::{Form, FormReader, LoadError, Runtime, VarMeta};

/// Minimal host runtime for tests. Reads one balanced form or bare atom at
/// a time; evaluation echoes the form text, except `(boom)`, which raises a
/// two-link failure chain the way a real compiler exception would.
pub struct ScriptRuntime;

impl Runtime for ScriptRuntime {
    fn read_next(&mut self, reader: &mut FormReader<'_>) -> Result<Option<Form>, LoadError> {
        let rest = reader.remaining();
        let stripped = rest.trim_start();
        let leading = rest.len() - stripped.len();
        if stripped.is_empty() {
            reader.advance(rest.len());
            return Ok(None);
        }

        let consumed = if stripped.starts_with('(') {
            let mut depth = 0i32;
            let mut end = None;
            for (i, c) in stripped.char_indices() {
                match c {
                    '(' => depth += 1,
                    ')' => {
                        depth -= 1;
                        if depth == 0 {
                            end = Some(i + 1);
                            break;
                        }
                    }
                    _ => {}
                }
            }
            end.ok_or_else(|| LoadError::new("Syntax error: unbalanced form"))?
        } else {
            stripped
                .find(char::is_whitespace)
                .unwrap_or(stripped.len())
        };

        let text = &stripped[..consumed];
        reader.advance(leading + consumed);
        Ok(Some(Form::new(text)))
    }

    fn eval(&mut self, form: &Form) -> Result<String, LoadError> {
        if form.text() == "(boom)" {
            return Err(LoadError::new("Load failed entirely")
                .caused_by(LoadError::new("Err: boom.opal:7: exploded")));
        }
        Ok(form.text().to_string())
    }

    fn macroexpand1(&mut self, form: &Form) -> Result<Form, LoadError> {
        if let Some(body) = form.text().strip_prefix("(when ") {
            return Ok(Form::new(format!("(if {}", body)));
        }
        Ok(form.clone())
    }
}

/// Namespace layout used across the integration tests:
/// `app.core` interning `foo`, `foobar`, `baz`, with `app.web` aliasing it
/// as `core` and referring `foo`.
pub fn populate(table: &mut opal_backend::NamespaceTable) {
    let core = table.ensure("app.core");
    core.intern(
        "foo",
        VarMeta::new()
            .with_source("core.opal", 3)
            .with_arglists(vec!["[x]".into()])
            .with_doc("Does foo."),
    );
    core.intern("foobar", VarMeta::new());
    core.intern("baz", VarMeta::new());
    let web = table.ensure("app.web");
    web.alias("core", "app.core");
    web.refer("foo", "app.core", "foo");
}
