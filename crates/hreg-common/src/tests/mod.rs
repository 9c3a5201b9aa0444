mod instr;
mod usage;
