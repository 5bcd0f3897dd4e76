//! Embeds every file under `blobs/` the way resource generators do on
//! linker-symbol platforms: one object file per blob, exporting
//! `_binary_<name>_start` and `_binary_<name>_end` around its bytes.
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use object::{
    Architecture, BinaryFormat, Endianness, SymbolFlags, SymbolKind, SymbolScope,
    write::{Object, StandardSection, Symbol, SymbolSection},
};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("Object writing error")]
    Object(#[from] object::write::Error),
    #[error("Environment variable '{0}' not set by Cargo")]
    Var(&'static str),
    #[error("Unsupported target {0} '{1}'")]
    Target(&'static str, String),
    #[error("Refusing to embed empty file '{0}'")]
    Empty(String),
}

fn main() -> Result<()> {
    let manifest_dir = PathBuf::from(var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(var("OUT_DIR")?);
    let target = TargetInfo::from_build_script_vars()?;

    let blobs = manifest_dir.join("blobs");
    println!("cargo:rerun-if-changed={}", blobs.display());

    for entry in fs::read_dir(&blobs)? {
        let path = entry?.path();
        if path.is_file() {
            embed(&path, &out_dir, &target)?;
        }
    }
    Ok(())
}

fn var(name: &'static str) -> Result<String> {
    env::var(name).map_err(|_| Error::Var(name))
}

/// `test_file.txt` -> `test_file_txt`
fn symbol_stem(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn embed(path: &Path, out_dir: &Path, target: &TargetInfo) -> Result<()> {
    let content = fs::read(path)?;
    if content.is_empty() {
        return Err(Error::Empty(path.display().to_string()));
    }

    let stem = symbol_stem(path);
    let start_name = format!("_binary_{stem}_start");
    let end_name = format!("_binary_{stem}_end");

    let mut object = Object::new(target.binfmt, target.arch, target.endian);
    let section = object.add_subsection(StandardSection::ReadOnlyData, stem.as_bytes());

    let start = object.add_symbol(Symbol {
        name: start_name.into_bytes(),
        value: 0,
        size: content.len() as u64,
        kind: SymbolKind::Data,
        scope: SymbolScope::Dynamic,
        weak: false,
        section: SymbolSection::Section(section),
        flags: SymbolFlags::None,
    });
    let offset = object.add_symbol_data(start, section, &content, 1);

    object.add_symbol(Symbol {
        name: end_name.into_bytes(),
        value: offset + content.len() as u64,
        size: 0,
        kind: SymbolKind::Data,
        scope: SymbolScope::Dynamic,
        weak: false,
        section: SymbolSection::Section(section),
        flags: SymbolFlags::None,
    });

    let object_path = out_dir.join(format!("resource_{stem}.o"));
    fs::write(&object_path, object.write()?)?;
    println!("cargo:rustc-link-arg={}", object_path.display());
    Ok(())
}

struct TargetInfo {
    binfmt: BinaryFormat,
    arch: Architecture,
    endian: Endianness,
}

impl TargetInfo {
    fn from_build_script_vars() -> Result<Self> {
        let os = var("CARGO_CFG_TARGET_OS")?;
        let binfmt = match os.as_str() {
            "macos" | "ios" => BinaryFormat::MachO,
            "windows" => BinaryFormat::Coff,
            "linux" | "android" | "freebsd" | "netbsd" | "openbsd" | "dragonfly" | "solaris"
            | "illumos" => BinaryFormat::Elf,
            _ => return Err(Error::Target("operating system", os)),
        };
        let arch = var("CARGO_CFG_TARGET_ARCH")?;
        let arch = match arch.as_str() {
            "x86" => Architecture::I386,
            "x86_64" => Architecture::X86_64,
            "arm" => Architecture::Arm,
            "aarch64" => Architecture::Aarch64,
            "riscv32" => Architecture::Riscv32,
            "riscv64" => Architecture::Riscv64,
            "mips" => Architecture::Mips,
            "mips64" => Architecture::Mips64,
            "powerpc" => Architecture::PowerPc,
            "powerpc64" => Architecture::PowerPc64,
            _ => return Err(Error::Target("architecture", arch)),
        };
        let endian = var("CARGO_CFG_TARGET_ENDIAN")?;
        let endian = match endian.as_str() {
            "little" => Endianness::Little,
            "big" => Endianness::Big,
            _ => return Err(Error::Target("endianness", endian)),
        };

        Ok(Self {
            binfmt,
            arch,
            endian,
        })
    }
}
