use covidash::error::AppResult;

fn main() -> AppResult<()> {
    covidash::entry::run()
}
