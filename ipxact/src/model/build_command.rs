/// Fields shared by every build command
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildModel {
    pub command: String,
    pub flags: String,
    /// Expression; when it evaluates to nonzero, `flags` replace the default flags
    pub replace_default_flags: String,
}

/// `ipxact:buildCommand` of a single file
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileBuildCommand {
    pub model: BuildModel,
    /// Path of the produced file
    pub target_name: String,
    /// Attribute of `flags`, only written when `flags` is given
    pub flags_append: super::BooleanValue,
}

/// `ipxact:defaultFileBuilder` of a file set
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileBuilder {
    /// Type of files this builder applies to, e.g. `verilogSource`
    pub file_type: String,
    pub model: BuildModel,
}

impl FileBuilder {
    pub fn new(file_type: impl Into<String>) -> Self {
        Self {
            file_type: file_type.into(),
            ..Default::default()
        }
    }
}

/// Any build command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildCommand {
    File(FileBuildCommand),
    Default(FileBuilder),
}

impl BuildCommand {
    pub fn model(&self) -> &BuildModel {
        match self {
            BuildCommand::File(cmd) => &cmd.model,
            BuildCommand::Default(builder) => &builder.model,
        }
    }

    pub fn model_mut(&mut self) -> &mut BuildModel {
        match self {
            BuildCommand::File(cmd) => &mut cmd.model,
            BuildCommand::Default(builder) => &mut builder.model,
        }
    }
}

impl From<FileBuildCommand> for BuildCommand {
    fn from(value: FileBuildCommand) -> Self {
        Self::File(value)
    }
}

impl From<FileBuilder> for BuildCommand {
    fn from(value: FileBuilder) -> Self {
        Self::Default(value)
    }
}
