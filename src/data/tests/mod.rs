//! 数据准备模块单元测试

mod encoding;

use super::Table;

/// 房价数据的一个小样本：2 个数值列、2 个类别列、目标列 price
fn housing_table() -> Table {
    let csv = "\
price,area,bedrooms,mainroad,furnishingstatus
13300000,7420,4,yes,furnished
12250000,8960,4,yes,furnished
9100000,6000,3,no,semi-furnished
4410000,3000,2,no,unfurnished
";
    Table::parse(csv.as_bytes()).unwrap()
}
