use super::{
    common::{has_valid_name, is_valid_is_present},
    BuildCommandValidator, Validator,
};
use crate::{
    expression::ExpressionParser,
    model::{File, FileBuildCommand, FileBuilder, FileSet, FileType},
};

/// Validator for `ipxact:file`
pub struct FileValidator<'a> {
    parser: &'a dyn ExpressionParser,
    build_validator: BuildCommandValidator<'a>,
}

impl<'a> FileValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self {
            parser,
            build_validator: BuildCommandValidator::new(parser),
        }
    }

    pub fn has_valid_name(&self, file: &File) -> bool {
        has_valid_name(&file.name)
    }

    /// At least one file type. A `user` file type must name the actual type.
    pub fn has_valid_file_types(&self, file: &File) -> bool {
        !file.file_types.is_empty() && file.file_types.iter().all(is_valid_file_type)
    }

    pub fn has_valid_is_present(&self, file: &File) -> bool {
        is_valid_is_present(self.parser, &file.is_present)
    }

    pub fn has_valid_build_command(&self, file: &File) -> bool {
        file.build_command.as_ref().map_or(true, |command| {
            Validator::<FileBuildCommand>::validate(&self.build_validator, command)
        })
    }

    pub fn has_valid_dependencies(&self, file: &File) -> bool {
        file.dependencies.iter().all(|dep| !dep.trim().is_empty())
    }
}

fn is_valid_file_type(file_type: &FileType) -> bool {
    match file_type.value.trim() {
        "" => false,
        "user" => !file_type.user.trim().is_empty(),
        _ => true,
    }
}

impl<'a> Validator<File> for FileValidator<'a> {
    fn validate(&self, file: &File) -> bool {
        self.has_valid_name(file)
            && self.has_valid_file_types(file)
            && self.has_valid_is_present(file)
            && self.has_valid_build_command(file)
            && self.has_valid_dependencies(file)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, file: &File, context: &str) {
        let name = &file.name;
        if !self.has_valid_name(file) {
            errors.push(format!("No name specified for file within {context}."));
        }
        if file.file_types.is_empty() {
            errors.push(format!(
                "No file types specified for file {name} within {context}."
            ));
        }
        for file_type in file.file_types.iter().filter(|t| !is_valid_file_type(t)) {
            if file_type.value.trim().is_empty() {
                errors.push(format!(
                    "Empty file type set for file {name} within {context}."
                ));
            } else {
                errors.push(format!(
                    "No user defined file type set for file {name} within {context}."
                ));
            }
        }
        if !self.has_valid_is_present(file) {
            errors.push(format!(
                "Invalid is present expression '{}' set for file {name} within {context}.",
                file.is_present
            ));
        }
        if let Some(command) = &file.build_command {
            Validator::<FileBuildCommand>::find_errors_in(
                &self.build_validator,
                errors,
                command,
                &format!("file {name}"),
            );
        }
        if !self.has_valid_dependencies(file) {
            errors.push(format!(
                "Empty dependency set for file {name} within {context}."
            ));
        }
    }
}

/// Validator for `ipxact:fileSet`
pub struct FileSetValidator<'a> {
    file_validator: FileValidator<'a>,
    build_validator: BuildCommandValidator<'a>,
}

impl<'a> FileSetValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self {
            file_validator: FileValidator::new(parser),
            build_validator: BuildCommandValidator::new(parser),
        }
    }

    pub fn has_valid_name(&self, file_set: &FileSet) -> bool {
        has_valid_name(&file_set.name_group.name)
    }

    pub fn has_valid_groups(&self, file_set: &FileSet) -> bool {
        file_set.groups.iter().all(|group| !group.trim().is_empty())
    }

    pub fn has_valid_files(&self, file_set: &FileSet) -> bool {
        file_set
            .files
            .iter()
            .all(|file| self.file_validator.validate(file))
    }

    pub fn has_valid_default_file_builders(&self, file_set: &FileSet) -> bool {
        file_set
            .default_file_builders
            .iter()
            .all(|builder| Validator::<FileBuilder>::validate(&self.build_validator, builder))
    }

    pub fn has_valid_dependencies(&self, file_set: &FileSet) -> bool {
        file_set
            .dependencies
            .iter()
            .all(|dep| !dep.trim().is_empty())
    }
}

impl<'a> Validator<FileSet> for FileSetValidator<'a> {
    fn validate(&self, file_set: &FileSet) -> bool {
        self.has_valid_name(file_set)
            && self.has_valid_groups(file_set)
            && self.has_valid_files(file_set)
            && self.has_valid_default_file_builders(file_set)
            && self.has_valid_dependencies(file_set)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, file_set: &FileSet, context: &str) {
        let name = &file_set.name_group.name;
        if !self.has_valid_name(file_set) {
            errors.push(format!(
                "Invalid name '{name}' set for file set within {context}."
            ));
        }
        if !self.has_valid_groups(file_set) {
            errors.push(format!(
                "Empty group name set for file set {name} within {context}."
            ));
        }

        let child_context = format!("file set {name}");
        for file in &file_set.files {
            self.file_validator
                .find_errors_in(errors, file, &child_context);
        }
        for builder in &file_set.default_file_builders {
            Validator::<FileBuilder>::find_errors_in(
                &self.build_validator,
                errors,
                builder,
                &child_context,
            );
        }
        if !self.has_valid_dependencies(file_set) {
            errors.push(format!(
                "Empty dependency set for file set {name} within {context}."
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{expression::SystemVerilogParser, validator::test_util::errors_of};

    #[test]
    fn user_file_type_needs_user_attribute() {
        let parser = SystemVerilogParser;
        let validator = FileValidator::new(&parser);

        let mut file = File::new("../src/uart.v", "user");
        assert!(!validator.has_valid_file_types(&file));
        file.file_types[0].user = "linkerScript".to_owned();
        assert!(validator.validate(&file));

        file.file_types.clear();
        assert_eq!(
            errors_of(&validator, &file, "file set rtl"),
            vec!["No file types specified for file ../src/uart.v within file set rtl."]
        );
    }

    #[test]
    fn file_errors_are_reported() {
        let parser = SystemVerilogParser;
        let validator = FileValidator::new(&parser);

        let mut file = File::new("", "");
        file.is_present = "2".to_owned();
        file.dependencies = vec![" ".to_owned()];
        let mut command = FileBuildCommand::default();
        command.model.replace_default_flags = "(1".to_owned();
        file.build_command = Some(command);

        assert!(!validator.validate(&file));
        assert_eq!(
            errors_of(&validator, &file, "file set rtl"),
            vec![
                "No name specified for file within file set rtl.",
                "Empty file type set for file  within file set rtl.",
                "Invalid is present expression '2' set for file  within file set rtl.",
                "Invalid replace default flags value '(1' set for build command in file .",
                "Empty dependency set for file  within file set rtl.",
            ]
        );
    }

    #[test]
    fn file_set_validates_children() {
        let parser = SystemVerilogParser;
        let validator = FileSetValidator::new(&parser);

        let mut file_set = FileSet::new("rtl");
        file_set.groups = vec!["sourceFiles".to_owned()];
        file_set.files = vec![File::new("uart.v", "verilogSource")];
        file_set.default_file_builders = vec![FileBuilder::new("verilogSource")];
        file_set.dependencies = vec!["include".to_owned()];
        assert!(validator.validate(&file_set));

        file_set.groups.push(String::new());
        file_set.files.push(File::new("", "verilogSource"));
        file_set.default_file_builders.push(FileBuilder::new(" "));
        assert!(!validator.validate(&file_set));
        assert_eq!(
            errors_of(&validator, &file_set, "component c"),
            vec![
                "Empty group name set for file set rtl within component c.",
                "No name specified for file within file set rtl.",
                "No file type set for file builder in file set rtl.",
            ]
        );
    }
}
