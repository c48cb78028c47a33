fn main() {
    use sqlparser::{parser::Parser, dialect::GenericDialect};
    let r = Parser::parse_sql(&GenericDialect {}, "SELECT FROM WHERE");
    println!("{:?}", r);
}
