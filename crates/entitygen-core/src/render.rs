//! Java class rendering for entity descriptors.
//!
//! The layout reproduces the historical generator byte for byte so existing
//! generated trees diff cleanly:
//!
//! ```text
//! public class AppUsersEntity extends AppEntityBase {
//! \tpublic Integer id;
//! \tpublic String name;
//!
//! \tpublic AppUsersEntity(){}
//!
//! \tpublic AppUsersEntity(Integer id, String name){ 
//! \t\tthis.id = id;
//! \t\tthis.name = name;
//! \t} 
//! }
//! ```
//!
//! Field names and types are emitted as written. Reserved words and invalid
//! identifiers are not rejected.

use crate::descriptor::EntityDescriptor;

/// Render the full class body for `descriptor`.
pub fn render(descriptor: &EntityDescriptor<'_>) -> String {
    let mut code = String::new();

    code.push_str(&render_header(descriptor));
    code.push_str(&render_fields(descriptor));
    code.push_str(&format!("\tpublic {}(){{}}\n\n", descriptor.class_name));
    code.push_str(&render_constructor(descriptor));
    code.push('}');

    code
}

fn render_header(descriptor: &EntityDescriptor<'_>) -> String {
    match descriptor.superclass_name {
        Some(superclass) => format!(
            "public class {} extends {} {{\n",
            descriptor.class_name, superclass
        ),
        None => format!("public class {} {{\n", descriptor.class_name),
    }
}

fn render_fields(descriptor: &EntityDescriptor<'_>) -> String {
    let declarations: Vec<String> = descriptor
        .fields
        .iter()
        .map(|field| format!("\tpublic {} {};", field.java_type(), field.name()))
        .collect();

    declarations.join("\n") + "\n\n"
}

fn render_constructor(descriptor: &EntityDescriptor<'_>) -> String {
    let params: Vec<String> = descriptor
        .fields
        .iter()
        .map(|field| format!("{} {}", field.java_type(), field.name()))
        .collect();

    let assignments: Vec<String> = descriptor
        .fields
        .iter()
        .map(|field| format!("\t\tthis.{0} = {0};", field.name()))
        .collect();

    format!(
        "\tpublic {}({}){{ \n{}\n\t}} \n",
        descriptor.class_name,
        params.join(", "),
        assignments.join("\n")
    )
}
