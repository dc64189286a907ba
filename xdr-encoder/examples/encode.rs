use std::{fs::File, path::PathBuf, str::FromStr};
use structopt::StructOpt;
use xdr_encoder::Encoder;

/// A value given on the command line as `<type>:<value>`.
#[derive(Debug)]
enum Item {
    Bool(bool),
    U16(u16),
    U32(u32),
    U64(u64),
    Str(String),
    Hex(Vec<u8>),
}

impl FromStr for Item {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = s
            .split_once(':')
            .ok_or_else(|| format!("expected <type>:<value>, got {:?}", s))?;
        let item = match kind {
            "bool" => Item::Bool(value.parse().map_err(|e| format!("{}: {}", s, e))?),
            "u16" => Item::U16(value.parse().map_err(|e| format!("{}: {}", s, e))?),
            "u32" => Item::U32(value.parse().map_err(|e| format!("{}: {}", s, e))?),
            "u64" => Item::U64(value.parse().map_err(|e| format!("{}: {}", s, e))?),
            "str" => Item::Str(value.to_owned()),
            "hex" => Item::Hex(hex::decode(value).map_err(|e| format!("{}: {}", s, e))?),
            _ => return Err(format!("unknown type {:?}", kind)),
        };
        Ok(item)
    }
}

/// Encode values into an XDR file, in the order given.
///
/// Set RUST_LOG=xdr_encoder=trace to see every value as it is written.
#[derive(StructOpt, Debug)]
#[structopt(name = "xdr-encode")]
struct Opt {
    /// Output file
    #[structopt(short, long, parse(from_os_str))]
    output: PathBuf,

    /// Values to encode: bool:true, u16:7, u32:42, u64:9, str:hello, hex:deadbeef
    items: Vec<Item>,

    /// Number of payload bytes shown in debug dumps
    #[structopt(long, default_value = "32")]
    max_debug_bytes: usize,
}

pub fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    let file = match File::create(&opt.output) {
        Ok(file) => file,
        Err(e) => {
            log::error!("Could not create {}: {}", opt.output.display(), e);
            return;
        }
    };
    let mut enc = Encoder::new(file).with_max_debug_bytes(opt.max_debug_bytes);

    for item in &opt.items {
        let res = match item {
            Item::Bool(v) => enc.write_bool(*v),
            Item::U16(v) => enc.write_u16(*v),
            Item::U32(v) => enc.write_u32(*v),
            Item::U64(v) => enc.write_u64(*v),
            Item::Str(v) => enc.write_str(v),
            Item::Hex(v) => enc.write_bytes(v),
        };
        if let Err(e) = res {
            log::error!("Error while encoding {:?}: {}", item, e);
            break;
        }
    }

    log::info!("Wrote {} bytes to {}", enc.total(), opt.output.display());
}
