use html_from_docx::inspect;
use html_from_docx::package::Package;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();

    let args = env::args().skip(1).collect::<Vec<_>>();
    if args.len() != 1 {
        eprintln!("usage: probe <input.docx>");
        std::process::exit(2);
    }

    let path = &args[0];
    let result =
        Package::open(Path::new(path)).and_then(|mut package| inspect::report(path, &mut package));
    match result {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("probe error: {e}");
            std::process::exit(1);
        }
    }
}
