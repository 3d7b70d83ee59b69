use super::Validator;
use crate::{
    expression::ExpressionParser,
    model::{BuildCommand, BuildModel, FileBuildCommand, FileBuilder},
};

/// Validator for build commands of files and default file builders of file sets
pub struct BuildCommandValidator<'a> {
    parser: &'a dyn ExpressionParser,
}

impl<'a> BuildCommandValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self { parser }
    }

    pub fn has_valid_replace_default_flags(&self, model: &BuildModel) -> bool {
        self.parser
            .is_valid_expression(&model.replace_default_flags)
    }

    /// A default file builder must say which files it builds
    pub fn has_valid_file_type(&self, builder: &FileBuilder) -> bool {
        !builder.file_type.trim().is_empty()
    }

    fn find_model_errors(&self, errors: &mut Vec<String>, model: &BuildModel, context: &str) {
        if !self.has_valid_replace_default_flags(model) {
            errors.push(format!(
                "Invalid replace default flags value '{}' set for build command in {context}.",
                model.replace_default_flags
            ));
        }
    }
}

impl<'a> Validator<FileBuildCommand> for BuildCommandValidator<'a> {
    fn validate(&self, command: &FileBuildCommand) -> bool {
        self.has_valid_replace_default_flags(&command.model)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, command: &FileBuildCommand, context: &str) {
        self.find_model_errors(errors, &command.model, context);
    }
}

impl<'a> Validator<FileBuilder> for BuildCommandValidator<'a> {
    fn validate(&self, builder: &FileBuilder) -> bool {
        self.has_valid_replace_default_flags(&builder.model) && self.has_valid_file_type(builder)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, builder: &FileBuilder, context: &str) {
        self.find_model_errors(errors, &builder.model, context);
        if !self.has_valid_file_type(builder) {
            errors.push(format!("No file type set for file builder in {context}."));
        }
    }
}

impl<'a> Validator<BuildCommand> for BuildCommandValidator<'a> {
    fn validate(&self, command: &BuildCommand) -> bool {
        match command {
            BuildCommand::File(command) => Validator::<FileBuildCommand>::validate(self, command),
            BuildCommand::Default(builder) => Validator::<FileBuilder>::validate(self, builder),
        }
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, command: &BuildCommand, context: &str) {
        match command {
            BuildCommand::File(command) => {
                Validator::<FileBuildCommand>::find_errors_in(self, errors, command, context)
            }
            BuildCommand::Default(builder) => {
                Validator::<FileBuilder>::find_errors_in(self, errors, builder, context)
            }
        }
    }
}

#[test]
fn build_command_validator_works() {
    use crate::{expression::SystemVerilogParser, validator::test_util::errors_of};

    let parser = SystemVerilogParser;
    let validator = BuildCommandValidator::new(&parser);

    let mut command = FileBuildCommand::default();
    command.model.replace_default_flags = "1".to_owned();
    assert!(validator.validate(&BuildCommand::from(command)));

    let mut builder = FileBuilder::new("");
    builder.model.replace_default_flags = "1 +".to_owned();
    let builder = BuildCommand::from(builder);
    assert!(!validator.validate(&builder));
    assert_eq!(
        errors_of(&validator, &builder, "file set rtl"),
        vec![
            "Invalid replace default flags value '1 +' set for build command in file set rtl.",
            "No file type set for file builder in file set rtl.",
        ]
    );
}
