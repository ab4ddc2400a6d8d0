//! Integration tests for template loading and rendering
//!
//! Tests:
//! - Loading templates by fixed name from a directory
//! - Rendering both memories
//! - Errors for missing or invalid templates

use std::fs;
use std::path::Path;

use vhdmem_render::{write_document, RenderError, Renderer, TemplateSet};
use vhdmem_spec::{ConfigString, InstructionList, MemoryKind};

fn write_templates(dir: &Path, config: &str, program: &str) {
    fs::write(dir.join(MemoryKind::Config.template_name()), config).unwrap();
    fs::write(dir.join(MemoryKind::Program.template_name()), program).unwrap();
}

// ============================================================================
// Directory Templates
// ============================================================================

#[test]
fn test_render_from_template_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_templates(
        dir.path(),
        "cfg <= x\"{{ config }}\";\n",
        "{% for i in instructions -%}\n{{ i }}\n{% endfor -%}\n",
    );

    let renderer = Renderer::new(TemplateSet::from_dir(dir.path()).unwrap());

    let mut config = ConfigString::new("1F");
    config.pad_to(4).unwrap();
    let doc = renderer.render_config(&config).unwrap();
    assert_eq!(doc.text, "cfg <= x\"001F\";");

    let mut list = InstructionList::new(vec![0xA, 0xB]);
    list.pad_to(3).unwrap();
    let doc = renderer.render_program(&list).unwrap();
    assert_eq!(doc.text, "0000000A\n0000000B\n00000000\n");
}

#[test]
fn test_load_none_uses_builtin() {
    let set = TemplateSet::load(None).unwrap();
    let renderer = Renderer::new(set);
    let doc = renderer.render_config(&ConfigString::new("0")).unwrap();
    assert!(doc.text.contains("entity auto_config_memory is"));
}

#[test]
fn test_render_and_write() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("auto_program_memory.vhd");

    let renderer = Renderer::new(TemplateSet::builtin().unwrap());
    let list = InstructionList::new(vec![0xDEAD_BEEF]);
    let doc = renderer.render_program(&list).unwrap();
    write_document(&doc, &out).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("0 => x\"DEADBEEF\"\n    );"));
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_missing_template_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(MemoryKind::Config.template_name()), "{{ config }}").unwrap();

    let err = TemplateSet::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, RenderError::TemplateIo { .. }));
    assert!(err.to_string().contains("auto_program_memory.vhd.template"));
}

#[test]
fn test_invalid_template_reports_name() {
    let dir = tempfile::tempdir().unwrap();
    write_templates(dir.path(), "ok", "line one\n{{ instructions | }}\nline three\n");

    let err = TemplateSet::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, RenderError::Template { .. }));
    assert!(err
        .to_string()
        .starts_with("Invalid template auto_program_memory.vhd.template"));
}

#[test]
fn test_jinja_templates_from_toolchain() {
    let dir = tempfile::tempdir().unwrap();
    write_templates(
        dir.path(),
        "-- {{ config | length }} chars\nx\"{{ config }}\"\n",
        "-- {{ instructions | length }} words\n{% for i in instructions %}{{ loop.index0 + 1 }}: {{ i }}\n{% endfor %}",
    );

    let renderer = Renderer::new(TemplateSet::from_dir(dir.path()).unwrap());

    let mut config = ConfigString::new("F");
    config.pad_to(4).unwrap();
    let doc = renderer.render_config(&config).unwrap();
    assert_eq!(doc.text, "-- 4 chars\nx\"000F\"");

    let mut list = InstructionList::new(vec![0x13]);
    list.pad_to(2).unwrap();
    let doc = renderer.render_program(&list).unwrap();
    assert_eq!(doc.text, "-- 2 words\n1: 00000013\n2: 00000000\n");
}

#[test]
fn test_template_with_wrong_variable() {
    let dir = tempfile::tempdir().unwrap();
    write_templates(dir.path(), "{{ cfg }}", "{{ instructions }}");

    let renderer = Renderer::new(TemplateSet::from_dir(dir.path()).unwrap());
    let err = renderer.render_config(&ConfigString::new("0")).unwrap_err();
    assert!(matches!(err, RenderError::Render { .. }));
    assert!(err.chain().contains("cfg"));
}
