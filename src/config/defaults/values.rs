use std::path::PathBuf;

/// Default origin directory scanned for MIDI files
pub fn default_source() -> PathBuf {
    PathBuf::from("./midi")
}

/// Default destination directory for converted files
pub fn default_destination() -> PathBuf {
    PathBuf::from("./omd")
}

/// Default converter executable shipped by OneTesla
pub fn default_converter() -> PathBuf {
    PathBuf::from("omdconvert.exe")
}

/// Default MIDI extensions, without the leading dot
pub fn default_extensions() -> Vec<String> {
    vec!["mid".to_string(), "midi".to_string()]
}

/// Default extension written by the converter
pub fn default_output_extension() -> String {
    "omd".to_string()
}

/// Default verbosity
pub fn default_verbose() -> bool {
    false
}
