use self::{info::Info, lookup::Lookup};

mod info;
mod lookup;

pub enum CliRes {
    Ok,
    Err,
}

pub trait Cli {
    fn name(&self) -> &'static str;
    /// `args[1]` is the name of the module.
    ///
    /// Arguments for the module start at `args[2]`
    fn cli(&self) -> CliRes;
    fn cli_help(&self);
}

pub fn cli() -> CliRes {
    // Add new modules here.
    let modules: &[&dyn Cli] = &[&Info, &Lookup];

    let args: Vec<String> = std::env::args().collect();

    let help = || {
        println!(
            "\
atlas-native

Available modules:"
        );
        for module in modules {
            println!("{}", module.name());
        }

        for module in modules {
            println!();
            module.cli_help();
        }
    };

    if args.len() < 2 {
        help();
        return CliRes::Err;
    }

    for module in modules {
        if args[1] == module.name() {
            return module.cli();
        }
    }

    // In case nothing fits then prints this again.
    help();

    CliRes::Err
}
