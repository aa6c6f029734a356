//! Built-in GLSL sources, embedded at build time.

/// Passes `location = 0` positions straight through as clip coordinates.
pub const VERTEX_SHADER_SOURCE: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
"#;

/// Flat orange fill.
pub const FRAGMENT_SHADER_SOURCE: &str = r#"#version 330 core
out vec4 FragColor;

void main()
{
    FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
"#;
