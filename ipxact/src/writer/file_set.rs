use super::{write_is_present, write_name_group, write_vendor_extensions, XmlWriter};
use crate::{
    error::WriteError,
    model::{BuildModel, File, FileBuildCommand, FileBuilder, FileSet, Revision},
};

/// Write an `ipxact:fileSet` element
pub fn write_file_set(
    w: &mut XmlWriter,
    file_set: &FileSet,
    revision: Revision,
) -> Result<(), WriteError> {
    w.start("ipxact:fileSet")?;
    write_name_group(w, &file_set.name_group, revision)?;
    write_texts(w, "ipxact:group", &file_set.groups)?;
    for file in &file_set.files {
        write_file(w, file, revision)?;
    }
    for builder in &file_set.default_file_builders {
        write_file_builder(w, builder)?;
    }
    write_texts(w, "ipxact:dependency", &file_set.dependencies)?;
    write_vendor_extensions(w, &file_set.vendor_extensions)?;
    w.end("ipxact:fileSet")
}

/// Write an `ipxact:file` element
pub fn write_file(w: &mut XmlWriter, file: &File, _revision: Revision) -> Result<(), WriteError> {
    w.start_with_attributes("ipxact:file", &[("fileId", &file.file_id)])?;
    w.text_element("ipxact:name", &file.name)?;
    write_is_present(w, &file.is_present)?;
    for file_type in &file.file_types {
        w.text_element_with_attributes(
            "ipxact:fileType",
            &[("user", &file_type.user)],
            &file_type.value,
        )?;
    }
    w.optional_text_element("ipxact:isStructural", &file.is_structural.to_string())?;
    if file.is_include_file.is_specified() {
        w.text_element_with_attributes(
            "ipxact:isIncludeFile",
            &[(
                "externalDeclarations",
                file.external_declarations.to_string(),
            )],
            &file.is_include_file.to_string(),
        )?;
    }
    if !file.logical_name.is_empty() {
        w.text_element_with_attributes(
            "ipxact:logicalName",
            &[("default", file.logical_name_default.to_string())],
            &file.logical_name,
        )?;
    }
    write_texts(w, "ipxact:exportedName", &file.exported_names)?;
    if let Some(command) = &file.build_command {
        write_build_command(w, command)?;
    }
    write_texts(w, "ipxact:dependency", &file.dependencies)?;
    write_texts(w, "ipxact:imageType", &file.image_types)?;
    w.optional_text_element("ipxact:description", &file.description)?;
    write_vendor_extensions(w, &file.vendor_extensions)?;
    w.end("ipxact:file")
}

/// Write the `ipxact:buildCommand` of a file
pub fn write_build_command(
    w: &mut XmlWriter,
    command: &FileBuildCommand,
) -> Result<(), WriteError> {
    w.start("ipxact:buildCommand")?;
    w.optional_text_element("ipxact:command", &command.model.command)?;
    if !command.model.flags.is_empty() {
        w.text_element_with_attributes(
            "ipxact:flags",
            &[("append", command.flags_append.to_string())],
            &command.model.flags,
        )?;
    }
    w.optional_text_element(
        "ipxact:replaceDefaultFlags",
        &command.model.replace_default_flags,
    )?;
    w.optional_text_element("ipxact:targetName", &command.target_name)?;
    w.end("ipxact:buildCommand")
}

/// Write an `ipxact:defaultFileBuilder` element
pub fn write_file_builder(w: &mut XmlWriter, builder: &FileBuilder) -> Result<(), WriteError> {
    w.start("ipxact:defaultFileBuilder")?;
    w.text_element("ipxact:fileType", &builder.file_type)?;
    write_build_model(w, &builder.model)?;
    w.end("ipxact:defaultFileBuilder")
}

fn write_build_model(w: &mut XmlWriter, model: &BuildModel) -> Result<(), WriteError> {
    w.optional_text_element("ipxact:command", &model.command)?;
    w.optional_text_element("ipxact:flags", &model.flags)?;
    w.optional_text_element("ipxact:replaceDefaultFlags", &model.replace_default_flags)
}

fn write_texts(w: &mut XmlWriter, tag: &str, texts: &[String]) -> Result<(), WriteError> {
    for text in texts {
        w.text_element(tag, text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{BooleanValue, FileType},
        reader::{read_file_set, test_util::read_fragment},
        writer::test_util::write_to_string,
    };

    #[test]
    fn write_file_works() {
        let mut file = File::new("./testFile", "vhdlSource");
        file.file_id = "testID".to_owned();
        file.is_include_file = BooleanValue::True;
        file.external_declarations = BooleanValue::True;
        file.logical_name = "logicalTest".to_owned();
        file.build_command = Some(FileBuildCommand {
            model: BuildModel {
                command: "testCommand".to_owned(),
                flags: "testFlags".to_owned(),
                replace_default_flags: String::new(),
            },
            target_name: "target".to_owned(),
            flags_append: BooleanValue::Unspecified,
        });

        assert_eq!(
            write_to_string(|w| write_file(w, &file, Revision::Std22)),
            "<ipxact:file fileId=\"testID\">\
             <ipxact:name>./testFile</ipxact:name>\
             <ipxact:fileType>vhdlSource</ipxact:fileType>\
             <ipxact:isIncludeFile externalDeclarations=\"true\">true</ipxact:isIncludeFile>\
             <ipxact:logicalName>logicalTest</ipxact:logicalName>\
             <ipxact:buildCommand>\
             <ipxact:command>testCommand</ipxact:command>\
             <ipxact:flags>testFlags</ipxact:flags>\
             <ipxact:targetName>target</ipxact:targetName>\
             </ipxact:buildCommand>\
             </ipxact:file>"
        );
    }

    #[test]
    fn file_set_survives_a_round_trip() {
        let mut file = File::new("./testFile", "user");
        file.file_types[0].user = "testUserFileType".to_owned();
        file.file_types.push(FileType::new("vhdlSource"));
        file.is_present = "4*4/4-3".to_owned();
        file.is_structural = BooleanValue::False;
        file.logical_name = "logicalTest".to_owned();
        file.logical_name_default = BooleanValue::True;
        file.exported_names = vec!["externalExport".to_owned()];
        file.image_types = vec!["jpg".to_owned()];
        file.description = "This is an important file.".to_owned();

        let mut builder = FileBuilder::new("verilogSource");
        builder.model.command = "vlog".to_owned();
        builder.model.replace_default_flags = "1".to_owned();

        let mut file_set = FileSet::new("testFileSet");
        file_set.groups = vec!["rtl".to_owned(), "sim".to_owned()];
        file_set.files.push(file);
        file_set.default_file_builders.push(builder);
        file_set.dependencies.push("../include".to_owned());

        let text = write_to_string(|w| write_file_set(w, &file_set, Revision::Std22));
        let read = read_fragment(&text, |node| read_file_set(node, Revision::Std22));
        assert_eq!(read, file_set);
    }
}
