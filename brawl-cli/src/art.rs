pub const TITLE: &str = r"
  ____  ____      ___        ___     _
 | __ )|  _ \    / \ \      / / |   | |
 |  _ \| |_) |  / _ \ \ /\ / /| |   | |
 | |_) |  _ <  / ___ \ V  V / | |___|_|
 |____/|_| \_\/_/   \_\_/\_/  |_____(_)
";

pub const VICTORY: &str = r"
  \o/  VICTORY  \o/
";

pub const DEFEAT: &str = r"
  x_x  DEFEAT  x_x
";
