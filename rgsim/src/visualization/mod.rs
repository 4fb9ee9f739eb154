pub mod rgsim_vis3d;
