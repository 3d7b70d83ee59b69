use super::{
    common::read_texts, read_boolean, read_is_present, read_name_group, read_vendor_extensions,
    XmlNode,
};
use crate::model::{
    BooleanValue, BuildModel, File, FileBuildCommand, FileBuilder, FileSet, FileType, Revision,
};

/// Read an `ipxact:fileSet` element
pub fn read_file_set(node: &XmlNode, revision: Revision) -> FileSet {
    FileSet {
        name_group: read_name_group(node, revision),
        groups: read_texts(node, "group"),
        files: node
            .children_with_tag_name("file")
            .iter()
            .map(|file| read_file(file, revision))
            .collect(),
        default_file_builders: node
            .children_with_tag_name("defaultFileBuilder")
            .iter()
            .map(read_file_builder)
            .collect(),
        dependencies: read_texts(node, "dependency"),
        vendor_extensions: read_vendor_extensions(node),
    }
}

/// Read an `ipxact:file` element
pub fn read_file(node: &XmlNode, _revision: Revision) -> File {
    let include_file = node.find_child("isIncludeFile");
    let logical_name = node.find_child("logicalName");

    File {
        file_id: node.attribute("fileId").to_owned(),
        name: node.find_text_by_tag_name("name"),
        is_present: read_is_present(node),
        file_types: node
            .children_with_tag_name("fileType")
            .iter()
            .map(|file_type| FileType {
                value: file_type.text().to_owned(),
                user: file_type.attribute("user").to_owned(),
            })
            .collect(),
        is_structural: read_boolean(node, "isStructural"),
        is_include_file: read_boolean(node, "isIncludeFile"),
        external_declarations: include_file.map_or(BooleanValue::Unspecified, |n| {
            BooleanValue::from_text(n.attribute("externalDeclarations"))
        }),
        logical_name: node.find_text_by_tag_name("logicalName"),
        logical_name_default: logical_name.map_or(BooleanValue::Unspecified, |n| {
            BooleanValue::from_text(n.attribute("default"))
        }),
        exported_names: read_texts(node, "exportedName"),
        build_command: node.find_child("buildCommand").map(|n| read_build_command(&n)),
        dependencies: read_texts(node, "dependency"),
        image_types: read_texts(node, "imageType"),
        description: node.find_text_by_tag_name("description"),
        vendor_extensions: read_vendor_extensions(node),
    }
}

/// Read the `ipxact:buildCommand` of a file
pub fn read_build_command(node: &XmlNode) -> FileBuildCommand {
    FileBuildCommand {
        model: read_build_model(node),
        target_name: node.find_text_by_tag_name("targetName"),
        flags_append: node
            .find_child("flags")
            .map_or(BooleanValue::Unspecified, |flags| {
                BooleanValue::from_text(flags.attribute("append"))
            }),
    }
}

/// Read an `ipxact:defaultFileBuilder` of a file set
pub fn read_file_builder(node: &XmlNode) -> FileBuilder {
    FileBuilder {
        file_type: node.find_text_by_tag_name("fileType"),
        model: read_build_model(node),
    }
}

fn read_build_model(node: &XmlNode) -> BuildModel {
    BuildModel {
        command: node.find_text_by_tag_name("command"),
        flags: node.find_text_by_tag_name("flags"),
        replace_default_flags: node.find_text_by_tag_name("replaceDefaultFlags"),
    }
}
